use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Error returned when a string cannot be parsed as a percentage.
#[derive(Debug, Error)]
pub enum ParsePercentageError {
    #[error("percentage is empty")]
    Empty,

    #[error("invalid percentage '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// rupee sign and removes commas (both Western and lakh-style grouping).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let without_symbol = trimmed
        .strip_prefix('₹')
        .or_else(|| trimmed.strip_prefix("Rs."))
        .or_else(|| trimmed.strip_prefix("Rs"))
        .unwrap_or(trimmed);
    without_symbol.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`] amount.
///
/// Accepts `"1200000"`, `"12,00,000"`, `"1,200,000"` and `"₹12,00,000"`.
/// Empty input is an error rather than zero, since every amount the
/// front end asks for is required.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a string into a [`Decimal`] percentage.
///
/// Accepts `"50"`, `"62.5"` and `"62.5%"`. Currency symbols and digit
/// grouping are rejected; range checks are left to input validation.
pub fn parse_percentage(s: &str) -> Result<Decimal, ParsePercentageError> {
    let trimmed = s.trim();
    let normalized = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if normalized.is_empty() {
        return Err(ParsePercentageError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid percentage: {}", e);
        ParsePercentageError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}
