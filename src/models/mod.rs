use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

// ── Output ────────────────────────────────────────────────────────────────────

/// Close-price statistics for one ticker. Field order is the output order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSummary {
    pub ticker: String,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
}

/// Summaries in the order their tickers were supplied.
pub type ResultSet = Vec<PriceSummary>;

// ── Date window ───────────────────────────────────────────────────────────────

/// [start, end] of the history request. Only `start` goes on the wire;
/// `end` is implied by the row limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window of `years` ending on `today`. Feb 29 clamps to Feb 28.
    pub fn ending(today: NaiveDate, years: u32) -> Self {
        let start = years
            .checked_mul(12)
            .and_then(|months| today.checked_sub_months(Months::new(months)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    pub fn current(years: u32) -> Self {
        Self::ending(chrono::Local::now().date_naive(), years)
    }
}

// ── Raw API payload ───────────────────────────────────────────────────────────

/// Body of `/api/quote/{ticker}/historical`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawQuoteResponse {
    #[serde(default)]
    pub status: QuoteStatus,
    pub data: Option<QuoteData>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteStatus {
    pub r_code: Option<i64>,
    pub b_code_message: Option<Vec<BCodeMessage>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BCodeMessage {
    pub code: Option<i64>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteData {
    pub symbol: Option<String>,
    pub trades_table: Option<TradesTable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TradesTable {
    pub rows: Option<Vec<RawHistoricalRow>>,
}

/// One trading day as the API renders it; every field is display text.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawHistoricalRow {
    pub date: Option<String>,
    pub close: Option<String>,
}
