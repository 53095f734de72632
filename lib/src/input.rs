//! Forgiving parsers for values typed at the interactive prompts.

use crate::error::{Result, StashError};

/// Empty (or whitespace-only) answers mean "not provided"
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse a reading time in minutes.
///
/// An empty answer is zero. Leading digits are accepted so "15 min" reads
/// as 15. Anything else is an `InputParse` error; callers keep the field at
/// zero and warn.
pub fn parse_reading_time(input: &str) -> Result<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }

    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if digits_end == 0 {
        return Err(StashError::InputParse(format!(
            "reading time '{}' is not a number of minutes",
            input
        )));
    }

    input[..digits_end].parse::<u32>().map_err(|e| {
        StashError::InputParse(format!("reading time '{}' is out of range: {}", input, e))
    })
}

/// A y/n answer; only "y" or "yes" (any case) count as yes
pub fn parse_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("   ", 0)]
    #[case("12", 12)]
    #[case(" 7 ", 7)]
    #[case("15 min", 15)]
    #[case("20minutes", 20)]
    fn test_parse_reading_time_ok(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(parse_reading_time(input).unwrap(), expected);
    }

    #[rstest]
    #[case("ten")]
    #[case("-5")]
    #[case("about 5")]
    #[case("99999999999")]
    fn test_parse_reading_time_rejects(#[case] input: &str) {
        let err = parse_reading_time(input).unwrap_err();
        assert!(matches!(err, StashError::InputParse(_)));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("notes".to_string()), Some("notes".to_string()));
    }

    #[rstest]
    #[case("y", true)]
    #[case("Y", true)]
    #[case(" yes ", true)]
    #[case("n", false)]
    #[case("", false)]
    #[case("yep", false)]
    fn test_parse_yes(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(parse_yes(input), expected);
    }
}
