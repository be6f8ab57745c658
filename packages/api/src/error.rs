//! Failure taxonomy for backend calls.

use thiserror::Error;

/// Why a backend call failed.
///
/// Authentication and authorization problems are not modeled here: they
/// surface as navigation redirects before a request is ever made, or as a
/// plain [`ApiError::Status`] when the backend rejects a token.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never completed (DNS, connection, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("server error {code}: {message}")]
    Status { code: u16, message: String },

    /// A success status whose body is not JSON. In practice this is an
    /// intermediary proxy or tunnel serving an HTML error page with a 200.
    #[error("server returned a non-JSON response (proxy or gateway problem)")]
    Gateway,

    /// The body was JSON but did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for the distinct "proxy returned HTML" case, which the list
    /// page reports differently from a normal failure.
    pub fn is_gateway(&self) -> bool {
        matches!(self, ApiError::Gateway)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
