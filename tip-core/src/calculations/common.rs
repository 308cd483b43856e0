//! Amount parsing and the three derived-value formulas.
//!
//! Amounts are entered as free text. Text that does not parse as a decimal
//! number degrades to zero for computation, while [`validate`] reports it so
//! the form can show a warning.

use std::num::ParseFloatError;

use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: ParseFloatError,
}

impl ParseAmountError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses `text` as a decimal floating-point amount.
///
/// The text is taken as-is: surrounding whitespace and thousands separators
/// are rejected, and the empty string is an error.
pub fn try_parse_amount(text: &str) -> Result<f64, ParseAmountError> {
    text.parse::<f64>().map_err(|source| ParseAmountError {
        input: text.to_string(),
        source,
    })
}

/// Returns the numeric value of `text`, or 0 when it does not parse.
///
/// # Examples
///
/// ```
/// use tip_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount("12.5"), 12.5);
/// assert_eq!(parse_amount("abc"), 0.0);
/// assert_eq!(parse_amount(""), 0.0);
/// ```
pub fn parse_amount(text: &str) -> f64 {
    try_parse_amount(text).unwrap_or(0.0)
}

/// Returns whether `text` parses as a decimal number.
///
/// The empty string is invalid here even though [`parse_amount`] maps it
/// to 0.
pub fn validate(text: &str) -> bool {
    try_parse_amount(text).is_ok()
}

/// Computes the tip.
///
/// A non-empty `custom_tip` wins over the percentage, even when it does not
/// parse (in which case the tip is 0).
///
/// # Examples
///
/// ```
/// use tip_core::calculations::common::compute_tip;
///
/// assert_eq!(compute_tip(100.0, "", 20), 20.0);
/// assert_eq!(compute_tip(100.0, "7", 20), 7.0);
/// ```
pub fn compute_tip(
    bill: f64,
    custom_tip: &str,
    percentage: u32,
) -> f64 {
    if !custom_tip.is_empty() {
        parse_amount(custom_tip)
    } else {
        bill * f64::from(percentage) / 100.0
    }
}

/// Bill plus tip.
pub fn compute_total(
    bill: f64,
    tip: f64,
) -> f64 {
    bill + tip
}

/// Splits `total` evenly across `people`.
///
/// Returns 0 for an empty party and whenever the quotient is NaN.
pub fn compute_per_person(
    total: f64,
    people: u32,
) -> f64 {
    if people == 0 {
        return 0.0;
    }

    let per_person = total / f64::from(people);
    if per_person.is_nan() { 0.0 } else { per_person }
}

/// Formats `value` as dollars with two decimal places, e.g. `$20.00`.
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // parse_amount / validate tests
    // =========================================================================

    #[test]
    fn parse_amount_accepts_decimal_text() {
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("-3"), -3.0);
    }

    #[test]
    fn parse_amount_defaults_invalid_text_to_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("1,234.56"), 0.0);
        assert_eq!(parse_amount(" 5"), 0.0);
    }

    #[test]
    fn parse_amount_treats_empty_as_zero() {
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn validate_rejects_empty_text() {
        assert!(!validate(""));
    }

    #[test]
    fn validate_matches_parse_success() {
        assert!(validate("42"));
        assert!(validate("0.01"));
        assert!(!validate("abc"));
        assert!(!validate("12abc"));
    }

    #[test]
    fn try_parse_amount_reports_input() {
        let error = try_parse_amount("abc").unwrap_err();

        assert_eq!(error.input(), "abc");
        assert!(error.to_string().starts_with("invalid amount 'abc'"));
    }

    // =========================================================================
    // compute_tip tests
    // =========================================================================

    #[test]
    fn compute_tip_uses_percentage_without_custom_tip() {
        assert_eq!(compute_tip(100.0, "", 20), 20.0);
        assert_eq!(compute_tip(80.0, "", 15), 12.0);
        assert_eq!(compute_tip(100.0, "", 0), 0.0);
    }

    #[test]
    fn compute_tip_custom_overrides_percentage() {
        assert_eq!(compute_tip(50.0, "12.5", 25), 12.5);
    }

    #[test]
    fn compute_tip_invalid_custom_is_zero() {
        assert_eq!(compute_tip(50.0, "abc", 25), 0.0);
    }

    // =========================================================================
    // compute_total / compute_per_person tests
    // =========================================================================

    #[test]
    fn compute_total_adds_tip() {
        assert_eq!(compute_total(100.0, 20.0), 120.0);
    }

    #[test]
    fn compute_per_person_splits_evenly() {
        assert_eq!(compute_per_person(120.0, 4), 30.0);
        assert_eq!(compute_per_person(62.5, 1), 62.5);
    }

    #[test]
    fn compute_per_person_zero_people_is_zero() {
        assert_eq!(compute_per_person(120.0, 0), 0.0);
        assert_eq!(compute_per_person(0.0, 0), 0.0);
    }

    #[test]
    fn compute_per_person_guards_nan() {
        assert_eq!(compute_per_person(f64::NAN, 3), 0.0);
    }

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_uses_two_decimals() {
        assert_eq!(format_currency(20.0), "$20.00");
        assert_eq!(format_currency(62.5), "$62.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1.0 / 3.0), "$0.33");
    }
}
