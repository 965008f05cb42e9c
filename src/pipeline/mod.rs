//! Sequential runner: fetch → summarise for each ticker, in order.
//!
//! A ticker that fails either step is logged and skipped. Nothing here is
//! fatal; writing the result set is the caller's job.

use crate::error::TickerError;
use crate::fetcher::QuoteSource;
use crate::models::{PriceSummary, ResultSet};
use crate::reducer::summarize;
use tracing::{debug, info, warn};

pub struct Pipeline<S> {
    source: S,
}

impl<S: QuoteSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn process(&self, ticker: &str) -> Result<PriceSummary, TickerError> {
        let resp = self.source.download(ticker)?;
        Ok(summarize(&resp)?)
    }

    pub fn run(&self, tickers: &[String]) -> (ResultSet, PipelineStats) {
        let mut results = ResultSet::with_capacity(tickers.len());
        let mut errors = 0usize;

        for (i, ticker) in tickers.iter().enumerate() {
            debug!("[{}/{}] {}", i + 1, tickers.len(), ticker);

            match self.process(ticker) {
                Ok(summary) => {
                    info!(
                        "{}: min={} max={} avg={:.4} median={}",
                        summary.ticker, summary.min, summary.max, summary.avg, summary.median
                    );
                    results.push(summary);
                }
                Err(e) => {
                    warn!("{}: skipped ({})", ticker, e);
                    errors += 1;
                }
            }
        }

        let stats = PipelineStats {
            tickers_requested: tickers.len(),
            tickers_succeeded: results.len(),
            errors,
        };

        info!(
            "=== Done: {} tickers | {} summarised | {} errors ===",
            stats.tickers_requested, stats.tickers_succeeded, stats.errors
        );

        (results, stats)
    }
}

#[derive(Debug, PartialEq)]
pub struct PipelineStats {
    pub tickers_requested: usize,
    pub tickers_succeeded: usize,
    pub errors: usize,
}
