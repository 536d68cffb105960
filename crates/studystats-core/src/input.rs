//! Parsing of raw observations typed by a user or passed on the command line.

use crate::error::{CoreError, Result};

/// Parse one observation.
///
/// Surrounding whitespace is ignored. Empty text, words and non-finite
/// values (`NaN`, `inf`) are rejected with [`CoreError::InvalidNumericInput`].
pub fn parse_observation(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::InvalidNumericInput {
            input: trimmed.to_string(),
        }),
    }
}

/// Parse an observation set separated by commas and/or whitespace.
///
/// Blank input yields an empty set; the first bad item aborts the parse.
pub fn parse_observations(raw: &str) -> Result<Vec<f64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(parse_observation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_with_whitespace() {
        assert_eq!(parse_observation(" 42 ").unwrap(), 42.0);
        assert_eq!(parse_observation("-1.5").unwrap(), -1.5);
    }

    #[test]
    fn rejects_non_numeric_text() {
        for raw in ["", "abc", "12min", "NaN", "inf"] {
            let err = parse_observation(raw).unwrap_err();
            assert!(matches!(err, CoreError::InvalidNumericInput { .. }), "{raw}");
        }
    }

    #[test]
    fn parses_lists() {
        assert_eq!(parse_observations("30,60, 90").unwrap(), vec![30.0, 60.0, 90.0]);
        assert_eq!(parse_observations("1 2\t3").unwrap(), vec![1.0, 2.0, 3.0]);
        assert!(parse_observations("  ").unwrap().is_empty());
    }

    #[test]
    fn list_reports_offending_item() {
        match parse_observations("10,ten,30") {
            Err(CoreError::InvalidNumericInput { input }) => assert_eq!(input, "ten"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
