use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// The invoice draft being edited.
///
/// Metadata fields are free-form text with no bearing on the totals.
/// Totals are never stored here; they are recomputed from `items` and `vat`
/// on every read (see `TotalsService`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub invoice_number: String,

    /// Date text as entered, normally `YYYY-MM-DD`
    #[serde(default)]
    pub issue_date: String,

    #[serde(default)]
    pub due_date: String,

    /// Issuer block (name, address, contact), multi-line
    #[serde(default)]
    pub from: String,

    /// Recipient block, multi-line
    #[serde(default)]
    pub to: String,

    /// Rows in display/print order
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Flat amount added to the item sum. Not a rate.
    #[serde(default)]
    pub vat: Decimal,

    #[serde(default)]
    pub payment_details: String,

    #[serde(default)]
    pub additional_notes: String,
}

impl Invoice {
    /// A fresh draft: empty metadata, zero VAT, one sample row.
    pub fn new() -> Self {
        Self {
            invoice_number: String::new(),
            issue_date: String::new(),
            due_date: String::new(),
            from: String::new(),
            to: String::new(),
            items: vec![LineItem::sample()],
            vat: Decimal::ZERO,
            payment_details: String::new(),
            additional_notes: String::new(),
        }
    }

    pub fn item(&self, id: uuid::Uuid) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}
