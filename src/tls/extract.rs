//! Certificate extraction utilities.

use chrono::{DateTime, Utc};

use crate::error_handling::CheckError;

/// Extracts the `notAfter` instant from a DER-encoded X.509 certificate.
///
/// # Arguments
///
/// * `der` - The certificate bytes as presented by the server
///
/// # Errors
///
/// Returns `CheckError::CertificateParse` if the bytes are not a certificate or
/// the expiry is outside the range chrono can represent.
pub(crate) fn certificate_not_after(der: &[u8]) -> Result<DateTime<Utc>, CheckError> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| CheckError::CertificateParse(e.to_string()))?;

    let timestamp = cert.validity().not_after.timestamp();
    DateTime::<Utc>::from_timestamp(timestamp, 0).ok_or_else(|| {
        CheckError::CertificateParse(format!("notAfter out of range: {timestamp}"))
    })
}
