pub mod http_client;

use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::models::{DateWindow, QuoteStatus, RawQuoteResponse};
use crate::utils::normalise_symbol;
use tracing::debug;
use url::Url;

use self::http_client::HttpClient;

// ── Source trait ──────────────────────────────────────────────────────────────

/// Swappable quote history source.
pub trait QuoteSource {
    fn download(&self, ticker: &str) -> Result<RawQuoteResponse, FetchError>;
}

// ── Nasdaq client ─────────────────────────────────────────────────────────────

pub struct NasdaqClient {
    client: HttpClient,
    base_url: Url,
    lookback_years: u32,
    row_limit: u32,
}

impl NasdaqClient {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        Ok(Self {
            client: HttpClient::new(config)?,
            base_url,
            lookback_years: config.lookback_years,
            row_limit: config.row_limit,
        })
    }

    /// URL for a ticker's history.
    /// e.g. AAPL → /api/quote/AAPL/historical?assetclass=stocks&fromdate=2021-10-19&limit=9999
    pub fn history_url(&self, symbol: &str, window: &DateWindow) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "quote", symbol, "historical"]);

        url.query_pairs_mut()
            .append_pair("assetclass", "stocks")
            .append_pair("fromdate", &window.start.format("%Y-%m-%d").to_string())
            .append_pair("limit", &self.row_limit.to_string());

        Ok(url)
    }
}

impl QuoteSource for NasdaqClient {
    fn download(&self, ticker: &str) -> Result<RawQuoteResponse, FetchError> {
        let symbol = normalise_symbol(ticker);
        let window = DateWindow::current(self.lookback_years);
        debug!("{}: requesting {} → {}", symbol, window.start, window.end);

        let url = self.history_url(&symbol, &window)?;
        let resp: RawQuoteResponse = self.client.get_json(&url)?;

        check_status(&resp.status)?;
        Ok(resp)
    }
}

/// Fail when the API put anything in `bCodeMessage`.
pub fn check_status(status: &QuoteStatus) -> Result<(), FetchError> {
    let Some(messages) = status.b_code_message.as_deref() else {
        return Ok(());
    };
    if messages.is_empty() {
        return Ok(());
    }

    debug!("API status rCode={:?}", status.r_code);

    let text: Vec<String> = messages
        .iter()
        .map(|m| match (&m.error_message, m.code) {
            (Some(msg), _) if !msg.trim().is_empty() => msg.trim().to_string(),
            (_, Some(code)) => format!("code {}", code),
            _ => "unspecified error".to_string(),
        })
        .collect();

    Err(FetchError::Api(text.join("; ")))
}
