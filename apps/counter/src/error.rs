//! # App Error Type
//!
//! Unified error type for counter commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CoreError ─────┐                                                       │
//! │                 │                                                       │
//! │  ConfigError ───┼──► AppError { code, message } ──► "! message" notice  │
//! │                 │                                                       │
//! │  bad input ─────┘                                                       │
//! │                                                                         │
//! │  Every AppError raised by a command is shown to the cashier and the     │
//! │  session continues. Only I/O failures on stdin/stdout end it.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use panaderia_core::CoreError;
use serde::Serialize;

use crate::state::ConfigError;

/// Error returned from counter commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "EMPTY_TICKET",
///   "message": "The ticket is empty."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message, shown verbatim
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or quantity rejected by add
    ValidationError,

    /// Receipt requested for an empty ticket
    EmptyTicket,

    /// Catalog index does not exist
    NotFound,

    /// Unknown command or malformed argument
    InvalidCommand,

    /// Startup configuration could not be loaded
    ConfigError,

    /// Amount too large to represent
    Overflow,

    /// Terminal read/write failure
    Io,

    /// Unexpected failure inside a command
    Internal,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid-command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }

    /// Whether the session can continue after showing this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.code, ErrorCode::Io | ErrorCode::ConfigError)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidSelection(_) | CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::EmptyTicket => ErrorCode::EmptyTicket,
            CoreError::ProductIndexOutOfRange { .. } => ErrorCode::NotFound,
            CoreError::AmountOverflow { .. } => ErrorCode::Overflow,
        };

        AppError::new(code, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        AppError::new(ErrorCode::Io, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use panaderia_core::ValidationError;

    #[test]
    fn test_user_signals_keep_message_verbatim() {
        let err = AppError::from(CoreError::InvalidSelection(ValidationError::Required {
            field: "quantity".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Please select a product and a valid quantity.");

        let err = AppError::from(CoreError::EmptyTicket);
        assert_eq!(err.code, ErrorCode::EmptyTicket);
        assert_eq!(err.message, "The ticket is empty.");
    }

    #[test]
    fn test_out_of_range_maps_to_not_found() {
        let err = AppError::from(CoreError::ProductIndexOutOfRange { index: 9, len: 5 });
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(AppError::from(CoreError::EmptyTicket)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": "EMPTY_TICKET", "message": "The ticket is empty."})
        );
    }

    #[test]
    fn test_io_is_not_recoverable() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert!(!err.is_recoverable());
    }
}
