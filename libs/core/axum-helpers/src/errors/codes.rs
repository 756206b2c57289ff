//! Type-safe error codes attached to error logs.
//!
//! The response body only carries `error` and `timestamp`; the integer code
//! goes into the `error_code` tracing field so dashboards can group failures.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
//! assert_eq!(ErrorCode::Conflict.code(), 1005);
//! ```

/// Error codes, grouped by client (1xxx) and server (2xxx) failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A field failed validation or a reference could not be resolved
    BadRequest,
    /// Request body was not valid JSON for the target type
    InvalidJson,
    /// Path id was not a number
    InvalidId,
    NotFound,
    /// Uniqueness or referential constraint
    Conflict,
    InternalError,
}

impl ErrorCode {
    pub const fn code(self) -> i32 {
        match self {
            ErrorCode::BadRequest => 1001,
            ErrorCode::InvalidJson => 1002,
            ErrorCode::InvalidId => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::Conflict => 1005,
            ErrorCode::InternalError => 2000,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::InvalidId => "INVALID_ID",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    pub const fn is_server_error(self) -> bool {
        self.code() >= 2000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
