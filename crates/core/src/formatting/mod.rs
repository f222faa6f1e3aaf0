pub mod decimals;
pub mod grouping;
pub mod parse;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use decimals::MAX_DECIMAL_PLACES;

/// Digit-grouping width used when none (or 0) is given.
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Options for a single `AmountFormatter` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Prepended to the output, e.g. `"$"`.
    pub prefix: Option<String>,

    /// Forced decimal-place count. `None` infers it from the amount.
    pub decimal_places: Option<u32>,

    /// Digits per group. `None` or `Some(0)` means `DEFAULT_GROUP_SIZE`.
    pub group_size: Option<usize>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = Some(size);
        self
    }

    fn forced_places(&self) -> Result<Option<u32>, CoreError> {
        match self.decimal_places {
            Some(places) if places > MAX_DECIMAL_PLACES => Err(CoreError::InvalidFormatOptions(
                format!("decimal_places must be at most {MAX_DECIMAL_PLACES}, got {places}"),
            )),
            other => Ok(other),
        }
    }

    fn resolved_group_size(&self) -> usize {
        match self.group_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_GROUP_SIZE,
        }
    }
}

/// Turns amounts into grouped, optionally prefixed display strings.
///
/// Two steps, kept separate: decimal-place inference (`decimals`) and
/// grouping/prefix rendering (`grouping`). Stateless; the same input always
/// yields the same string.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountFormatter;

impl AmountFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a float amount. Any finite value formats; NaN and infinities
    /// are rejected.
    ///
    /// ```
    /// use invoice_builder_core::formatting::{AmountFormatter, FormatOptions};
    ///
    /// let f = AmountFormatter::new();
    /// assert_eq!(f.format(1234.5, &FormatOptions::new()).unwrap(), "1,234.50");
    /// assert_eq!(f.format(0.0, &FormatOptions::new().with_prefix("$")).unwrap(), "$0");
    /// ```
    pub fn format(&self, amount: f64, options: &FormatOptions) -> Result<String, CoreError> {
        match decimals::decimal_from_f64("amount", amount) {
            Ok(value) => self.format_decimal(&value, options),
            // Beyond Decimal's range but still finite, hence integral.
            Err(CoreError::AmountOutOfRange(_)) => {
                let places = options.forced_places()?.unwrap_or(0);
                let fixed = decimals::to_fixed_integral_f64(amount, places);
                Ok(grouping::render(
                    &fixed,
                    options.prefix.as_deref(),
                    options.resolved_group_size(),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Format an exact decimal amount. Fails only on invalid options.
    pub fn format_decimal(
        &self,
        amount: &Decimal,
        options: &FormatOptions,
    ) -> Result<String, CoreError> {
        let places = match options.forced_places()? {
            Some(places) => places,
            None => decimals::infer_decimal_places(amount),
        };

        let mut fixed = decimals::to_fixed(amount, places);

        // A one-digit fraction from a one-digit value reads as cents: 1234.5 -> 1234.50
        if fixed.fraction.len() == 1 && decimals::fractional_digits(amount) == 1 {
            fixed.fraction.push('0');
        }

        Ok(grouping::render(
            &fixed,
            options.prefix.as_deref(),
            options.resolved_group_size(),
        ))
    }
}
