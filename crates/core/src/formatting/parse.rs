use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::CoreError;
use super::grouping::{DECIMAL_POINT, GROUP_SEPARATOR};

/// Parse an amount typed into a currency field (e.g. `"$1,234.50"`).
///
/// Accepts an optional `prefix`, a leading minus on either side of it, and
/// grouping separators. Blank or non-numeric text is an error: a financial
/// field is never silently read as zero.
pub fn parse_amount(field: &str, text: &str, prefix: Option<&str>) -> Result<Decimal, CoreError> {
    let invalid = || CoreError::invalid_number(field, text);

    let mut rest = text.trim();
    let mut negative = false;

    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped.trim_start();
    }
    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped.trim_start();
        }
    }
    if let Some(stripped) = rest.strip_prefix('-') {
        if negative {
            return Err(invalid());
        }
        negative = true;
        rest = stripped;
    }

    let cleaned: String = rest.chars().filter(|c| *c != GROUP_SEPARATOR).collect();
    let digit_count = cleaned.chars().filter(|c| c.is_ascii_digit()).count();
    let point_count = cleaned.chars().filter(|c| *c == DECIMAL_POINT).count();
    let only_numeric = cleaned
        .chars()
        .all(|c| c.is_ascii_digit() || c == DECIMAL_POINT);

    if digit_count == 0 || point_count > 1 || !only_numeric {
        return Err(invalid());
    }

    let value = Decimal::from_str(&cleaned)
        .map_err(|_| CoreError::AmountOutOfRange(format!("{field} = {text}")))?;

    Ok(if negative { -value } else { value })
}

/// Parse a quantity field. Quantities are plain numbers and must not be negative.
pub fn parse_quantity(text: &str) -> Result<Decimal, CoreError> {
    let quantity = parse_amount("quantity", text, None)?;
    if quantity.is_sign_negative() && !quantity.is_zero() {
        return Err(CoreError::ValidationError(format!(
            "Quantity must not be negative (got {quantity})"
        )));
    }
    Ok(quantity)
}
