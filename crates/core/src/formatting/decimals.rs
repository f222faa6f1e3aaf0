use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::errors::CoreError;

/// Inferred decimal places never exceed this (two-decimal currency semantics).
pub const MAX_INFERRED_DECIMAL_PLACES: u32 = 2;

/// Upper bound for an explicitly requested decimal-place count.
pub const MAX_DECIMAL_PLACES: u32 = 20;

/// A rounded amount split into its printable parts, before grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPoint {
    /// Sign of the rounded value. Never set for zero.
    pub negative: bool,
    /// Integer digits, no sign, no separators.
    pub integer: String,
    /// Fraction digits, padded to the requested length. Empty for 0 places.
    pub fraction: String,
}

/// Convert a float into an exact decimal through its shortest round-trip
/// representation, so `1234.5_f64` becomes exactly `1234.5`.
///
/// NaN and infinities are rejected with a labeled error rather than coerced.
pub fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::invalid_number(field, value));
    }
    let text = value.to_string();
    Decimal::from_str(&text).map_err(|_| CoreError::AmountOutOfRange(format!("{field} = {text}")))
}

/// Split a finite float too large for `Decimal` straight from its own digits.
///
/// Every f64 of that magnitude is integral, so the fraction is all zeros.
/// Anything below 1 rounds to zero at any supported place count.
pub fn to_fixed_integral_f64(value: f64, places: u32) -> FixedPoint {
    let fraction = "0".repeat(places as usize);
    if value.abs() < 1.0 {
        return FixedPoint {
            negative: false,
            integer: "0".into(),
            fraction,
        };
    }
    FixedPoint {
        negative: value.is_sign_negative(),
        integer: value.abs().to_string(),
        fraction,
    }
}

/// Number of significant fractional digits (trailing zeros ignored).
pub fn fractional_digits(value: &Decimal) -> u32 {
    value.normalize().scale()
}

/// Decimal places used when the caller does not force a count:
/// 0 for integral values, otherwise the digits present, capped at 2.
pub fn infer_decimal_places(value: &Decimal) -> u32 {
    fractional_digits(value).min(MAX_INFERRED_DECIMAL_PLACES)
}

/// Round half away from zero and split into sign, integer and fraction digits.
pub fn to_fixed(value: &Decimal, places: u32) -> FixedPoint {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.to_string()),
        None => (digits, String::new()),
    };

    let mut fraction = fraction;
    while (fraction.len() as u32) < places {
        fraction.push('0');
    }

    FixedPoint {
        negative,
        integer,
        fraction,
    }
}
