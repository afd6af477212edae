//! Transport seam between the catalog service and the network.
//!
//! The service only depends on [`Transport`]; [`CurlTransport`] is the
//! libcurl implementation used by the CLI, tests plug in in-memory fakes.

mod error;
mod http;

use serde::de::DeserializeOwned;

pub use error::TransportError;
pub use http::{CurlOptions, CurlTransport, SESSION_HEADER};

/// Fetches remote catalog content on behalf of a session.
pub trait Transport {
    /// GETs `url` and returns the response body as text.
    fn fetch_text(&self, url: &str, session_id: &str) -> Result<String, TransportError>;

    /// GETs `url` and decodes the JSON body into `T`.
    fn fetch_typed<T: DeserializeOwned>(
        &self,
        url: &str,
        session_id: &str,
    ) -> Result<T, TransportError>
    where
        Self: Sized,
    {
        let body = self.fetch_text(url, session_id)?;
        serde_json::from_str(&body).map_err(|source| TransportError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch_text(&self, url: &str, session_id: &str) -> Result<String, TransportError> {
        (**self).fetch_text(url, session_id)
    }
}
