use crate::error::OutputError;
use crate::models::PriceSummary;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

const INDENT: &[u8] = b"    ";

/// Render the result set as a JSON array indented by four spaces.
pub fn to_pretty_json(results: &[PriceSummary]) -> Result<Vec<u8>, OutputError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    results.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the result set to `path`, replacing any previous file.
///
/// The document is rendered before the file is touched, so a serialization
/// failure leaves nothing behind.
pub fn write_results(path: &Path, results: &[PriceSummary]) -> Result<(), OutputError> {
    let doc = to_pretty_json(results)?;

    let mut file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(&doc)
        .and_then(|_| file.flush())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!("{} summaries → {}", results.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PriceSummary> {
        vec![
            PriceSummary {
                ticker: "AAPL".into(),
                min: 116.36,
                max: 286.19,
                avg: 181.125,
                median: 176.65,
            },
            PriceSummary {
                ticker: "MSFT".into(),
                min: 213.25,
                max: 555.45,
                avg: 350.0,
                median: 342.1,
            },
        ]
    }

    #[test]
    fn indents_with_four_spaces() {
        let doc = String::from_utf8(to_pretty_json(&sample()[..1]).unwrap()).unwrap();
        let expected = "[\n    {\n        \"ticker\": \"AAPL\",\n        \"min\": 116.36,\n        \"max\": 286.19,\n        \"avg\": 181.125,\n        \"median\": 176.65\n    }\n]";
        assert_eq!(doc, expected);
    }

    #[test]
    fn empty_result_set_is_empty_array() {
        let doc = to_pretty_json(&[]).unwrap();
        assert_eq!(doc, b"[]");
    }

    #[test]
    fn written_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocks.json");

        write_results(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: Vec<PriceSummary> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.len(), 2);
        for (a, b) in back.iter().zip(sample().iter()) {
            assert_eq!(a.ticker, b.ticker);
            assert!((a.min - b.min).abs() < 1e-9);
            assert!((a.max - b.max).abs() < 1e-9);
            assert!((a.avg - b.avg).abs() < 1e-9);
            assert!((a.median - b.median).abs() < 1e-9);
        }
    }

    #[test]
    fn unwritable_path_is_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("stocks.json");

        let err = write_results(&path, &sample()).unwrap_err();
        assert!(matches!(err, OutputError::Create { .. }));
        assert!(!path.exists());
    }
}
