//! Reduces a fetched history payload to a `PriceSummary`.
//!
//! Any bad row rejects the whole ticker; there is no partial summary.

pub mod cleaner;

use crate::error::ExtractionError;
use crate::models::{PriceSummary, RawQuoteResponse};
use tracing::debug;

use self::cleaner::parse_close;

/// Summarise the close prices in `resp` under the API's own symbol.
pub fn summarize(resp: &RawQuoteResponse) -> Result<PriceSummary, ExtractionError> {
    let data = resp.data.as_ref().ok_or(ExtractionError::MissingData)?;

    let ticker = data
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ExtractionError::MissingSymbol)?
        .to_string();

    let rows = data
        .trades_table
        .as_ref()
        .and_then(|t| t.rows.as_deref())
        .unwrap_or_default();

    let prices = rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_close(i, row.close.as_deref()))
        .collect::<Result<Vec<f64>, _>>()?;

    // Rows arrive newest first.
    debug!(
        "{}: {} rows ({} → {})",
        ticker,
        rows.len(),
        rows.last().and_then(|r| r.date.as_deref()).unwrap_or("?"),
        rows.first().and_then(|r| r.date.as_deref()).unwrap_or("?"),
    );

    let stats = CloseStats::compute(prices).ok_or(ExtractionError::EmptyRows)?;

    Ok(PriceSummary {
        ticker,
        min: stats.min,
        max: stats.max,
        avg: stats.avg,
        median: stats.median,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
}

impl CloseStats {
    /// `None` for an empty series. The median is the element at `len / 2`
    /// of the sorted series, so even counts take the upper middle value.
    pub fn compute(mut prices: Vec<f64>) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }

        prices.sort_by(f64::total_cmp);

        let n = prices.len();
        let avg = prices.iter().sum::<f64>() / n as f64;

        Some(Self {
            min: prices[0],
            max: prices[n - 1],
            avg,
            median: prices[n / 2],
        })
    }
}
