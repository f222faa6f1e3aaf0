use serde::{Deserialize, Serialize};

use crate::formatting::{FormatOptions, DEFAULT_GROUP_SIZE};

/// User-configurable display settings for one editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Prepended to every money cell (e.g., "$"). `None` prints bare numbers.
    pub currency_prefix: Option<String>,

    /// Digits per thousands group.
    pub group_size: usize,

    /// Forced decimals for the grand total. `None` infers them like any amount.
    pub total_decimal_places: Option<u32>,
}

impl Settings {
    /// Options for prices, subtotals and VAT.
    pub fn amount_options(&self) -> FormatOptions {
        FormatOptions {
            prefix: self.currency_prefix.clone(),
            decimal_places: None,
            group_size: Some(self.group_size),
        }
    }

    /// Options for the grand total.
    pub fn total_options(&self) -> FormatOptions {
        FormatOptions {
            decimal_places: self.total_decimal_places,
            ..self.amount_options()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_prefix: Some("$".to_string()),
            group_size: DEFAULT_GROUP_SIZE,
            total_decimal_places: Some(2),
        }
    }
}
