use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals of an invoice at the moment it was computed, raw and formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    /// Number of rows
    pub item_count: usize,

    /// Sum of all row subtotals
    pub subtotal: Decimal,

    /// Flat VAT amount
    pub vat: Decimal,

    /// subtotal + vat
    pub total: Decimal,

    pub formatted_subtotal: String,
    pub formatted_vat: String,
    pub formatted_total: String,
}
