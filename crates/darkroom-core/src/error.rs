//! Application error taxonomy
//!
//! Every failure surfaced to a caller maps to one of these variants. The
//! HTTP layer derives status codes and response bodies from the helper
//! methods here rather than matching variants itself.

use thiserror::Error;

/// Log level an error should be reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Warn,
    Error,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Server misconfigured: {0}")]
    ServerMisconfigured(String),

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Store error: {0}")]
    Storage(String),

    #[error("Captcha rejected: {0}")]
    CaptchaRejected(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::MalformedRequest(_) => 400,
            AppError::InvalidParameter(_) => 400,
            AppError::CaptchaRejected(_) => 400,
            AppError::Unauthorized(_) => 401,
            AppError::InvalidFileType(_) => 415,
            AppError::Decode(_) => 422,
            AppError::Encode(_) => 500,
            AppError::ServerMisconfigured(_) => 500,
            AppError::Storage(_) => 502,
            AppError::Mail(_) => 502,
            AppError::Internal(_) | AppError::InternalWithSource { .. } => 500,
        }
    }

    /// Machine-readable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MalformedRequest(_) => "MALFORMED_REQUEST",
            AppError::InvalidParameter(_) => "INVALID_PARAMETER",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::ServerMisconfigured(_) => "SERVER_MISCONFIGURED",
            AppError::InvalidFileType(_) => "INVALID_FILE_TYPE",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::Encode(_) => "ENCODE_ERROR",
            AppError::Storage(_) => "STORE_ERROR",
            AppError::CaptchaRejected(_) => "CAPTCHA_REJECTED",
            AppError::Mail(_) => "MAIL_ERROR",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "INTERNAL",
        }
    }

    /// Message safe to show a caller. Server-side failures are summarized
    /// so configuration details never leak into responses.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ServerMisconfigured(_) => "Server configuration error".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Full message including details hidden from clients.
    pub fn detailed_message(&self) -> String {
        match self {
            AppError::InternalWithSource { message, source } => {
                format!("{}: {}", message, source)
            }
            other => other.to_string(),
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self.http_status_code() {
            400..=499 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_class() {
        assert_eq!(AppError::MalformedRequest("x".into()).http_status_code(), 400);
        assert_eq!(AppError::Unauthorized("x".into()).http_status_code(), 401);
        assert_eq!(AppError::InvalidFileType("x".into()).http_status_code(), 415);
        assert_eq!(AppError::Decode("x".into()).http_status_code(), 422);
        assert_eq!(AppError::Storage("x".into()).http_status_code(), 502);
        assert_eq!(AppError::ServerMisconfigured("x".into()).http_status_code(), 500);
    }

    #[test]
    fn server_side_details_are_hidden_from_clients() {
        let err = AppError::ServerMisconfigured("UPLOAD_SECRET missing".into());
        assert!(!err.client_message().contains("UPLOAD_SECRET"));
        assert!(err.detailed_message().contains("UPLOAD_SECRET"));
    }

    #[test]
    fn client_errors_log_at_warn() {
        assert_eq!(AppError::InvalidParameter("x".into()).log_level(), LogLevel::Warn);
        assert_eq!(AppError::Storage("x".into()).log_level(), LogLevel::Error);
    }
}
