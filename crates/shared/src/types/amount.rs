//! Fixed-point monetary amount parsing.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Raw user-entered strings are parsed into `rust_decimal::Decimal` and
//! normalized to two decimal places (cent precision).

use rust_decimal::Decimal;
use thiserror::Error;

/// Smallest representable monetary unit: one cent.
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Errors raised when a raw amount string cannot be coerced to cents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    /// The string is not a decimal number.
    #[error("not a valid amount: {0:?}")]
    NotANumber(String),

    /// The amount is negative; debit and credit fields are unsigned.
    #[error("amount must not be negative: {0}")]
    Negative(Decimal),

    /// The amount carries more than two decimal places.
    #[error("amount has sub-cent precision: {0}")]
    SubCentPrecision(Decimal),
}

/// Parses a raw user-entered string into a non-negative cent-precision amount.
///
/// An empty (or whitespace-only) string parses as zero, matching how an
/// untouched debit/credit form field arrives from the presentation layer.
///
/// # Errors
///
/// Returns [`AmountParseError`] if the string is not a number, is negative,
/// or has more than two decimal places.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let parsed: Decimal = trimmed
        .parse()
        .map_err(|_| AmountParseError::NotANumber(raw.to_string()))?;

    if parsed.is_sign_negative() && !parsed.is_zero() {
        return Err(AmountParseError::Negative(parsed));
    }

    // normalize() strips trailing zeros so "10.50" and "10.5000" both pass.
    if parsed.normalize().scale() > 2 {
        return Err(AmountParseError::SubCentPrecision(parsed));
    }

    let mut cents = parsed.normalize();
    cents.rescale(2);
    Ok(cents)
}
