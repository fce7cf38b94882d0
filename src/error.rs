//! Error types for the Ice and Fire client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Pagination and filter-reconstruction failures get dedicated variants so
//! callers can distinguish "no further pages" from a genuinely broken URL.

use thiserror::Error;

/// The main error type for the Ice and Fire client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("this result set does not exist")]
    NoResultSet,

    #[error("pagination info missing from url returned by the api")]
    PaginationInfoMissing,

    #[error("malformed page number: {value:?}")]
    MalformedPageNumber { value: String },

    #[error("malformed boolean filter '{key}': {value:?}")]
    MalformedBooleanFilter { key: String, value: String },

    #[error("malformed date filter '{key}': {value:?}")]
    MalformedDateFilter { key: String, value: String },

    #[error("malformed link header segment {segment:?}: {reason}")]
    LinkHeaderParse { segment: String, reason: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("resource not found")]
    ResourceNotFound,

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed page number error
    pub fn malformed_page_number(value: impl Into<String>) -> Self {
        Self::MalformedPageNumber {
            value: value.into(),
        }
    }

    /// Create a malformed boolean filter error
    pub fn malformed_boolean(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedBooleanFilter {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a malformed date filter error
    pub fn malformed_date(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedDateFilter {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a link header parse error
    pub fn link_header(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LinkHeaderParse {
            segment: segment.into(),
            reason: reason.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error means "no adjacent page", as opposed to a failure
    pub fn is_no_result_set(&self) -> bool {
        matches!(self, Self::NoResultSet)
    }
}

/// Result type alias for the Ice and Fire client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed_page_number("abc");
        assert_eq!(err.to_string(), "malformed page number: \"abc\"");

        let err = Error::malformed_boolean("hasDiedOut", "notabool");
        assert_eq!(
            err.to_string(),
            "malformed boolean filter 'hasDiedOut': \"notabool\""
        );

        let err = Error::http_status(500, "server error");
        assert_eq!(err.to_string(), "HTTP 500: server error");
    }

    #[test]
    fn test_is_no_result_set() {
        assert!(Error::NoResultSet.is_no_result_set());
        assert!(!Error::PaginationInfoMissing.is_no_result_set());
        assert!(!Error::ResourceNotFound.is_no_result_set());
    }
}
