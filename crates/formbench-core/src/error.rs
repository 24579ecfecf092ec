//! Shared error type across formbench crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Request body failed to parse.
    MalformedRequest,
    /// The audit sink could not be written.
    LogWriteFailure,
    /// Bad configuration (startup only, never sent to a client).
    BadConfig,
    /// Unsupported config file version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON error responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::MalformedRequest => "MALFORMED_REQUEST",
            ClientCode::LogWriteFailure => "LOG_WRITE_FAILURE",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FormbenchError>;

/// Unified error type used by the core, server, and load generator.
#[derive(Debug, Error)]
pub enum FormbenchError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("log write failed: {0}")]
    LogWrite(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FormbenchError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FormbenchError::MalformedRequest(_) => ClientCode::MalformedRequest,
            FormbenchError::LogWrite(_) => ClientCode::LogWriteFailure,
            FormbenchError::BadConfig(_) => ClientCode::BadConfig,
            FormbenchError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            FormbenchError::Internal(_) => ClientCode::Internal,
        }
    }
}
