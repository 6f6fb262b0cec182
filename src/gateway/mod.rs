//! Request gateway: authenticated GET/POST against the reseller API with
//! uniform response classification.

mod client;
mod logging;

pub use client::{DEFAULT_BASE_URL, Gateway};
pub use logging::{LogSink, NullLog, RequestLog};

#[cfg(test)]
pub use logging::MockRequestLog;
