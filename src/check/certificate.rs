//! TLS certificate stage.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

use crate::check::{CheckResult, ServiceState, Target};
use crate::config::CERT_EXPIRY_FORMAT;
use crate::error_handling::CheckError;
use crate::tls::{
    certificate_not_after, cipher_suite_name, inspect_tls, protocol_version_name, TlsSession,
};

/// Classifies a certificate expiry against the warning and critical windows.
///
/// The critical window is checked first: a certificate expiring within
/// `crit_days` is CRITICAL even when it is also within `warn_days`. Expiring
/// exactly at the end of a window does not trigger it.
///
/// Day counts too large for a timestamp saturate: a window reaching past the
/// representable future always triggers, one reaching before the representable
/// past never does.
pub fn evaluate_expiry(
    not_after: DateTime<Utc>,
    now: DateTime<Utc>,
    warn_days: i64,
    crit_days: i64,
) -> (ServiceState, &'static str) {
    if window_triggered(not_after, now, crit_days) {
        (ServiceState::Critical, "Cert critical")
    } else if window_triggered(not_after, now, warn_days) {
        (ServiceState::Warning, "Cert warning")
    } else {
        (ServiceState::Ok, "Cert okay")
    }
}

fn window_triggered(not_after: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    match TimeDelta::try_days(days).and_then(|delta| now.checked_add_signed(delta)) {
        Some(threshold) => threshold > not_after,
        None => days > 0,
    }
}

/// Formats an expiry as `Month DD, YYYY HH:MM` (UTC).
pub fn format_expiry(not_after: DateTime<Utc>) -> String {
    not_after.format(CERT_EXPIRY_FORMAT).to_string()
}

/// Checks the expiry of the certificate served by `https://<host>`.
pub async fn check_certificate(
    target: &Target,
    warn_days: i64,
    crit_days: i64,
    timeout: Duration,
) -> CheckResult {
    check_certificate_at(&target.url(), warn_days, crit_days, timeout).await
}

/// Same as [`check_certificate`], against an arbitrary `https://` URL.
pub async fn check_certificate_at(
    url: &str,
    warn_days: i64,
    crit_days: i64,
    timeout: Duration,
) -> CheckResult {
    let session = match inspect_tls(url, timeout).await {
        Ok(session) => session,
        Err(e) => return CheckResult::failed(e),
    };

    let verbose = session_trace(&session);
    match evaluate_session(&session, Utc::now(), warn_days, crit_days) {
        Ok(result) => result.with_verbose(verbose),
        Err(e) => CheckResult::failed(e).with_verbose(verbose),
    }
}

fn evaluate_session(
    session: &TlsSession,
    now: DateTime<Utc>,
    warn_days: i64,
    crit_days: i64,
) -> Result<CheckResult, CheckError> {
    let leaf = session
        .leaf_certificate
        .as_ref()
        .ok_or(CheckError::NoCertificates)?;
    let not_after = certificate_not_after(leaf)?;
    let (state, label) = evaluate_expiry(not_after, now, warn_days, crit_days);
    debug!("Certificate valid until {not_after}: {state}");

    Ok(CheckResult::evaluated(
        state,
        None,
        format!("{label}, valid until {}", format_expiry(not_after)),
    ))
}

fn session_trace(session: &TlsSession) -> String {
    let version = session
        .protocol_version
        .map(protocol_version_name)
        .unwrap_or_default();
    let cipher = session
        .cipher_suite
        .map(cipher_suite_name)
        .unwrap_or_default();
    format!("TLS Version used:  {version}\nCipher suite used: {cipher}\n")
}
