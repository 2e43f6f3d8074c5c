//! Error types for identity lookup.
//!
//! - [`FetchError`] - Transport-level failures of an HTTP request
//! - [`IdentityError`] - Why the current identity could not be determined

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Request timed out
    #[error("request timed out")]
    Timeout,
}

/// Identity lookup errors.
///
/// Every variant degrades to the "Guest" display state; none is shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// No authenticated session.
    #[error("not logged in")]
    Unauthenticated,
    /// The lookup request itself failed.
    #[error(transparent)]
    Fetch(FetchError),
    /// The response body was not a valid identity record.
    #[error("malformed identity: {0}")]
    Malformed(String),
}

impl From<FetchError> for IdentityError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::HttpError(401 | 403) => Self::Unauthenticated,
            other => Self::Fetch(other),
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_map_to_unauthenticated() {
        assert_eq!(
            IdentityError::from(FetchError::HttpError(401)),
            IdentityError::Unauthenticated
        );
        assert_eq!(
            IdentityError::from(FetchError::HttpError(403)),
            IdentityError::Unauthenticated
        );
    }

    #[test]
    fn test_other_fetch_errors_are_wrapped() {
        assert_eq!(
            IdentityError::from(FetchError::HttpError(500)),
            IdentityError::Fetch(FetchError::HttpError(500))
        );
        assert_eq!(
            IdentityError::from(FetchError::Timeout).to_string(),
            "request timed out"
        );
    }
}
