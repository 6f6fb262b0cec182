//! Error types shared by the gateway and the operation façade.

use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied parameter was rejected before any request was sent.
    InvalidArgument,
    /// The remote service rejected the API key.
    Authentication,
    /// Any other failure talking to the remote service.
    Api,
}

/// Errors returned by every client operation.
#[derive(Debug)]
pub enum Error {
    /// A parameter violates a documented constraint.
    InvalidArgument(String),
    /// HTTP 401 from the remote service.
    Authentication { status: StatusCode, body: String },
    /// Any other non-2xx status.
    Status { status: StatusCode, body: String },
    /// A 2xx response whose body is not JSON.
    Decode(serde_json::Error),
    /// The request never produced a response (DNS, connect, timeout, ...).
    Transport(reqwest::Error),
    /// The JSON is missing a field or has the wrong shape.
    UnexpectedResponse(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn unexpected(msg: impl Into<String>) -> Self {
        Error::UnexpectedResponse(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Authentication { .. } => ErrorKind::Authentication,
            Error::Status { .. }
            | Error::Decode(_)
            | Error::Transport(_)
            | Error::UnexpectedResponse(_) => ErrorKind::Api,
        }
    }

    /// Authentication failures are API errors too.
    pub fn is_api_error(&self) -> bool {
        !matches!(self, Error::InvalidArgument(_))
    }

    /// The HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Authentication { status, .. } | Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Authentication { status, body } => {
                write!(f, "Authentication failed: {} - Response: {}", status, body)
            }
            Error::Status { status, body } => {
                write!(f, "HTTP error occurred: {} - Response: {}", status, body)
            }
            Error::Decode(e) => write!(f, "Other error occurred: invalid JSON response: {}", e),
            Error::Transport(e) => write!(f, "Other error occurred: {}", e),
            Error::UnexpectedResponse(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(e) => Some(e),
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e)
    }
}
