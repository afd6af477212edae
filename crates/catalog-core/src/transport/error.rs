//! Transport error type returned by every catalog request.

use thiserror::Error;

/// Failure of a single catalog request. The service never catches these;
/// they reach the caller unchanged.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The URL parsed but does not use `http` or `https`.
    #[error("unsupported URL scheme {scheme:?} in {url:?}")]
    UnsupportedScheme { url: String, scheme: String },
    /// Curl reported an error (timeout, connection refused, too many redirects, etc.).
    #[error("GET {url}: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// Response body was not valid UTF-8.
    #[error("GET {url}: response body is not UTF-8")]
    Encoding {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// Response body could not be decoded into the requested type.
    #[error("GET {url}: cannot decode response: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            TransportError::InvalidUrl { url, .. }
            | TransportError::UnsupportedScheme { url, .. }
            | TransportError::Curl { url, .. }
            | TransportError::Http { url, .. }
            | TransportError::Encoding { url, .. }
            | TransportError::Decode { url, .. } => url,
        }
    }

    /// HTTP status, when the server answered with a non-2xx code.
    pub fn http_status(&self) -> Option<u32> {
        match self {
            TransportError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
