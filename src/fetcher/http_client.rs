use crate::config::FetcherConfig;
use crate::error::FetchError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, ACCEPT_LANGUAGE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Blocking HTTP client carrying the static headers the quote API expects.
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, header_value(&config.accept_language)?);
        headers.insert(ACCEPT_ENCODING, header_value(&config.accept_encoding)?);

        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let inner = builder.build().map_err(FetchError::Client)?;
        Ok(Self { inner })
    }

    /// GET `url` and decode the body as JSON. Blocks until the response
    /// arrives or the client gives up.
    pub fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let resp = self.inner.get(url.as_str()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn header_value(s: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(s).map_err(|_| FetchError::InvalidHeader(s.to_string()))
}
