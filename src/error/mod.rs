//! Error taxonomy.
//!
//! `FetchError` and `ExtractionError` are per-ticker and never abort a run;
//! the pipeline logs them and moves on. `OutputError` is the only fatal class.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a usable payload for a ticker.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("invalid header value: {0:?}")]
    InvalidHeader(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),
}

/// The payload arrived but its price rows can't be reduced.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("response has no data block")]
    MissingData,

    #[error("response has no symbol")]
    MissingSymbol,

    #[error("no price rows")]
    EmptyRows,

    #[error("row {row}: missing close price")]
    MissingClose { row: usize },

    #[error("row {row}: invalid close price {value:?}")]
    InvalidClose { row: usize, value: String },
}

/// Why a single ticker was dropped from the result set.
#[derive(Debug, Error)]
pub enum TickerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// The result set could not be persisted.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_error_is_transparent() {
        let err: TickerError = ExtractionError::InvalidClose {
            row: 3,
            value: "$abc".into(),
        }
        .into();
        assert_eq!(err.to_string(), "row 3: invalid close price \"$abc\"");

        let err: TickerError = FetchError::Api("Symbol not exists".into()).into();
        assert_eq!(err.to_string(), "API error: Symbol not exists");
    }
}
