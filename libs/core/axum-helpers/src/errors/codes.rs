//! Error codes attached to error logs.
//!
//! Clients only ever see the envelope's `message`; the code is a stable
//! identifier for log queries and dashboards.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    ValidationError,
    InvalidUuid,
    InvalidJson,
    NotFound,
    Unauthorized,
    Unprocessable,
    InvalidUpload,

    // Server errors (5000-5999)
    InternalError,
    ServiceUnavailable,
    DatabaseError,
    IoError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Unprocessable => "UNPROCESSABLE",
            Self::InvalidUpload => "INVALID_UPLOAD",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::IoError => "IO_ERROR",
        }
    }

    pub const fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::Unauthorized => 1005,
            Self::Unprocessable => 1006,
            Self::InvalidUpload => 1007,
            Self::InternalError => 5001,
            Self::ServiceUnavailable => 5002,
            Self::DatabaseError => 5003,
            Self::IoError => 5004,
        }
    }

    pub const fn is_server_error(&self) -> bool {
        self.code() >= 5000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let all = [
            ErrorCode::ValidationError,
            ErrorCode::InvalidUuid,
            ErrorCode::InvalidJson,
            ErrorCode::NotFound,
            ErrorCode::Unauthorized,
            ErrorCode::Unprocessable,
            ErrorCode::InvalidUpload,
            ErrorCode::InternalError,
            ErrorCode::ServiceUnavailable,
            ErrorCode::DatabaseError,
            ErrorCode::IoError,
        ];
        let mut codes: Vec<i32> = all.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_server_error_range() {
        assert!(ErrorCode::DatabaseError.is_server_error());
        assert!(!ErrorCode::NotFound.is_server_error());
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::InvalidUpload).unwrap();
        assert_eq!(json, "\"INVALID_UPLOAD\"");
    }
}
