use crate::error::ExtractionError;

/// Parse a close price: drop the one-character currency prefix, then read
/// the rest as a number. Thousands separators are allowed.
/// "$123.45" → 123.45 | "$1,234.56" → 1234.56
pub fn parse_close(row: usize, raw: Option<&str>) -> Result<f64, ExtractionError> {
    let s = raw.map(str::trim).unwrap_or_default();
    let mut chars = s.chars();
    if chars.next().is_none() {
        return Err(ExtractionError::MissingClose { row });
    }

    let invalid = || ExtractionError::InvalidClose {
        row,
        value: s.to_string(),
    };

    let digits = chars.as_str().replace(',', "");
    let price: f64 = digits.trim().parse().map_err(|_| invalid())?;
    if !price.is_finite() {
        return Err(invalid());
    }
    Ok(price)
}
