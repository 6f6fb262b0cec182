//! Per-gateway request logging.

use log::{error, info};

use crate::error::{Error, ErrorKind};

/// Receives one notification per request attempt.
///
/// Implementations must not panic; the gateway returns its result regardless
/// of what the logger does.
#[cfg_attr(test, mockall::automock)]
pub trait RequestLog: Send + Sync {
    fn succeeded(&self, url: &str);
    fn failed(&self, error: &Error);
}

/// Forwards to the `log` facade. Silent unless the process installs a logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl RequestLog for LogSink {
    fn succeeded(&self, url: &str) {
        info!("Request successful: {}", url);
    }

    fn failed(&self, err: &Error) {
        match err.kind() {
            ErrorKind::Authentication => error!("Authentication error: {}", err),
            _ => error!("Request failed: {}", err),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl RequestLog for NullLog {
    fn succeeded(&self, _url: &str) {}

    fn failed(&self, _error: &Error) {}
}
