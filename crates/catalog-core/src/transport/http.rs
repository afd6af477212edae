//! libcurl-backed transport: one Easy handle per GET, body collected in memory.

use std::time::Duration;

use super::{Transport, TransportError};

/// Request header carrying the catalog session id.
pub const SESSION_HEADER: &str = "sessionid";

const USER_AGENT: &str = concat!("catalog-client/", env!("CARGO_PKG_VERSION"));

/// Curl knobs taken from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurlOptions {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub max_redirections: u32,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            max_redirections: 10,
        }
    }
}

/// Blocking HTTP transport. Runs in the calling thread.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    opts: CurlOptions,
}

impl CurlTransport {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> CurlOptions {
        self.opts
    }
}

impl Transport for CurlTransport {
    fn fetch_text(&self, url: &str, session_id: &str) -> Result<String, TransportError> {
        let parsed = url::Url::parse(url).map_err(|source| TransportError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TransportError::UnsupportedScheme {
                url: url.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }
        let curl_err = |source: curl::Error| TransportError::Curl {
            url: url.to_string(),
            source,
        };

        tracing::debug!("GET {}", url);

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(curl_err)?;
        easy.useragent(USER_AGENT).map_err(curl_err)?;
        easy.follow_location(true).map_err(curl_err)?;
        easy.max_redirections(self.opts.max_redirections)
            .map_err(curl_err)?;
        easy.connect_timeout(Duration::from_secs(self.opts.connect_timeout_secs))
            .map_err(curl_err)?;
        easy.timeout(Duration::from_secs(self.opts.timeout_secs))
            .map_err(curl_err)?;

        if !session_id.is_empty() {
            let mut list = curl::easy::List::new();
            list.append(&format!("{}: {}", SESSION_HEADER, session_id.trim()))
                .map_err(curl_err)?;
            easy.http_headers(list).map_err(curl_err)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(curl_err)?;
            transfer.perform().map_err(curl_err)?;
        }

        let status = easy.response_code().map_err(curl_err)?;
        if !(200..300).contains(&status) {
            tracing::debug!("GET {} returned HTTP {}", url, status);
            return Err(TransportError::Http {
                url: url.to_string(),
                status,
            });
        }
        tracing::debug!("GET {} -> {} bytes", url, body.len());

        String::from_utf8(body).map_err(|source| TransportError::Encoding {
            url: url.to_string(),
            source,
        })
    }
}
