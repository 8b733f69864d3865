//! TLS session inspection.
//!
//! This module connects to an HTTPS endpoint and reports:
//! - Negotiated TLS protocol version
//! - Negotiated cipher suite
//! - The leaf certificate presented by the server
//!
//! Uses `tokio-rustls` for the TLS connection (validated against the webpki
//! roots) and `x509-parser` for certificate parsing.

mod extract;
mod names;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error};
use rustls::pki_types::{CertificateDer, ServerName};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::HTTPS_PORT;
use crate::error_handling::CheckError;

pub(crate) use extract::certificate_not_after;
pub use names::{cipher_suite_name, protocol_version_name};

/// What a TLS handshake revealed about the server.
#[derive(Debug, Clone)]
pub struct TlsSession {
    /// IANA protocol version identifier, if negotiated
    pub protocol_version: Option<u16>,
    /// IANA cipher suite identifier, if negotiated
    pub cipher_suite: Option<u16>,
    /// First certificate of the peer's chain, DER-encoded
    pub leaf_certificate: Option<CertificateDer<'static>>,
}

/// Host, port and request path of an `https://` URL.
struct Endpoint {
    server_name: ServerName<'static>,
    connect_host: String,
    port: u16,
    path: String,
    host_header: String,
}

fn endpoint_from_url(url: &str) -> Result<Endpoint, CheckError> {
    let invalid = |reason: String| CheckError::InvalidHost {
        host: url.to_string(),
        reason,
    };

    let parsed = url::Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    let (server_name, connect_host) = match parsed.host() {
        Some(url::Host::Domain(domain)) => (
            ServerName::try_from(domain.to_string()).map_err(|e| invalid(e.to_string()))?,
            domain.to_string(),
        ),
        Some(url::Host::Ipv4(ip)) => (ServerName::from(std::net::IpAddr::V4(ip)), ip.to_string()),
        Some(url::Host::Ipv6(ip)) => (ServerName::from(std::net::IpAddr::V6(ip)), ip.to_string()),
        None => return Err(invalid("URL has no host".to_string())),
    };
    let port = parsed.port().unwrap_or(HTTPS_PORT);
    let host_header = match parsed.port() {
        Some(p) => format!("{}:{p}", parsed.host_str().unwrap_or_default()),
        None => parsed.host_str().unwrap_or_default().to_string(),
    };

    Ok(Endpoint {
        server_name,
        connect_host,
        port,
        path: parsed.path().to_string(),
        host_header,
    })
}

/// Opens a TLS connection to `url`, sends a `GET` and reports the session.
///
/// The connect and the handshake are each bounded by `timeout`. The request is
/// written but its response is not read; only the session parameters matter.
///
/// # Arguments
///
/// * `url` - An `https://` URL; its host, port (default 443) and path are used
/// * `timeout` - Upper bound for the TCP connect and for the TLS handshake
///
/// # Errors
///
/// Returns an error if:
/// - The host is not a valid server name
/// - TCP connection fails or times out
/// - TLS handshake fails (including an untrusted or expired certificate) or times out
/// - The request cannot be written
pub async fn inspect_tls(url: &str, timeout: Duration) -> Result<TlsSession, CheckError> {
    let endpoint = endpoint_from_url(url)?;
    let host = endpoint.connect_host.clone();
    debug!("Opening TLS connection to {host}:{}", endpoint.port);

    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let sock = match tokio::time::timeout(
        timeout,
        TcpStream::connect((endpoint.connect_host.as_str(), endpoint.port)),
    )
    .await
    {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => {
            error!("Failed to connect to {host}:{} - {e}", endpoint.port);
            return Err(CheckError::Connect {
                host,
                port: endpoint.port,
                source: e,
            });
        }
        Err(_) => {
            error!("TCP connection timeout for {host}:{}", endpoint.port);
            return Err(CheckError::Timeout {
                step: "TCP connect",
                host,
                seconds: timeout.as_secs(),
            });
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let mut tls_stream = match tokio::time::timeout(
        timeout,
        connector.connect(endpoint.server_name, sock),
    )
    .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            error!("TLS connection failed for {host}: {e}");
            return Err(CheckError::Tls { host, source: e });
        }
        Err(_) => {
            error!("TLS handshake timeout for {host}");
            return Err(CheckError::Timeout {
                step: "TLS handshake",
                host,
                seconds: timeout.as_secs(),
            });
        }
    };

    let request = format!(
        "GET {} HTTP/1.1\r\n\
         Host: {}\r\n\
         Connection: close\r\n\
         Accept-Encoding: identity\r\n\
         \r\n",
        endpoint.path, endpoint.host_header,
    );

    if let Err(e) = tls_stream.write_all(request.as_bytes()).await {
        error!("Failed to write request to {host}: {e}");
        return Err(CheckError::Tls { host, source: e });
    }

    let connection = tls_stream.get_ref().1;
    let session = TlsSession {
        protocol_version: connection.protocol_version().map(u16::from),
        cipher_suite: connection
            .negotiated_cipher_suite()
            .map(|cs| u16::from(cs.suite())),
        leaf_certificate: connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .map(|cert| cert.clone().into_owned()),
    };

    // Best effort: the server may already have closed its side
    let _ = tls_stream.shutdown().await;

    debug!(
        "TLS session for {host}: version {:?}, cipher {:?}, certificate present: {}",
        session.protocol_version.map(protocol_version_name),
        session.cipher_suite.map(cipher_suite_name),
        session.leaf_certificate.is_some()
    );

    Ok(session)
}
