use serde::{Deserialize, Serialize};

/// One row of the printed items table. Every cell is display-ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintableRow {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub subtotal: String,
}

/// Everything the PDF renderer lays out on the fixed A4 template.
///
/// Built by `DocumentService`; the renderer only places strings and never
/// formats or sums anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintableInvoice {
    pub invoice_number: String,
    pub issue_date: String,
    pub due_date: String,
    pub from: String,
    pub to: String,
    pub rows: Vec<PrintableRow>,
    pub vat: String,
    pub total: String,
    pub payment_details: String,
    pub additional_notes: String,
}
