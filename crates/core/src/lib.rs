pub mod errors;
pub mod formatting;
pub mod models;
pub mod services;

use rust_decimal::Decimal;
use uuid::Uuid;

use errors::CoreError;
use formatting::decimals::{decimal_from_f64, MAX_DECIMAL_PLACES};
use formatting::parse::{parse_amount, parse_quantity};
use formatting::AmountFormatter;
use models::{
    document::PrintableInvoice, invoice::Invoice, line_item::LineItem, settings::Settings,
    summary::InvoiceSummary,
};
use services::{
    document_service::DocumentService, invoice_service::InvoiceService,
    totals_service::TotalsService,
};

/// Main entry point for the Invoice Builder core library.
/// Holds the invoice draft, display settings and the services that operate on them.
#[must_use]
pub struct InvoiceBuilder {
    invoice: Invoice,
    settings: Settings,
    formatter: AmountFormatter,
    invoice_service: InvoiceService,
    totals_service: TotalsService,
    document_service: DocumentService,
    /// Tracks whether any edit happened since the last export.
    dirty: bool,
}

impl std::fmt::Debug for InvoiceBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvoiceBuilder")
            .field("invoice_number", &self.invoice.invoice_number)
            .field("items", &self.invoice.items.len())
            .field("settings", &self.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl InvoiceBuilder {
    /// Start a new draft with one sample row and default settings.
    pub fn create_new() -> Self {
        Self::build(Invoice::new(), Settings::default())
    }

    /// Start a new draft with custom display settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self::build(Invoice::new(), settings)
    }

    /// Resume a draft from a JSON snapshot produced by `to_json`.
    /// Row subtotals are recomputed on load.
    pub fn load_from_json(json: &str, settings: Settings) -> Result<Self, CoreError> {
        let invoice: Invoice = serde_json::from_str(json)?;
        tracing::debug!(items = invoice.items.len(), "Loaded invoice draft from JSON");
        Ok(Self::build(invoice, settings))
    }

    /// JSON snapshot of the draft.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.invoice)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize invoice: {e}")))
    }

    #[must_use]
    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    // ── Metadata ────────────────────────────────────────────────────

    pub fn set_invoice_number(&mut self, value: impl Into<String>) {
        self.invoice.invoice_number = value.into();
        self.dirty = true;
    }

    pub fn set_issue_date(&mut self, value: impl Into<String>) {
        self.invoice.issue_date = value.into();
        self.dirty = true;
    }

    pub fn set_due_date(&mut self, value: impl Into<String>) {
        self.invoice.due_date = value.into();
        self.dirty = true;
    }

    pub fn set_from(&mut self, value: impl Into<String>) {
        self.invoice.from = value.into();
        self.dirty = true;
    }

    pub fn set_to(&mut self, value: impl Into<String>) {
        self.invoice.to = value.into();
        self.dirty = true;
    }

    pub fn set_payment_details(&mut self, value: impl Into<String>) {
        self.invoice.payment_details = value.into();
        self.dirty = true;
    }

    pub fn set_additional_notes(&mut self, value: impl Into<String>) {
        self.invoice.additional_notes = value.into();
        self.dirty = true;
    }

    // ── VAT ─────────────────────────────────────────────────────────

    /// Set the flat VAT amount added to the item sum.
    pub fn set_vat(&mut self, vat: Decimal) {
        tracing::debug!(%vat, "VAT updated");
        self.invoice.vat = vat;
        self.dirty = true;
    }

    /// Set VAT from a float. NaN and infinities are rejected.
    pub fn set_vat_f64(&mut self, vat: f64) -> Result<(), CoreError> {
        let vat = decimal_from_f64("vat", vat)?;
        self.set_vat(vat);
        Ok(())
    }

    /// Set VAT from the text of the VAT field (e.g. `"$50"`).
    pub fn set_vat_text(&mut self, text: &str) -> Result<(), CoreError> {
        let vat = parse_amount("vat", text, self.settings.currency_prefix.as_deref())?;
        self.set_vat(vat);
        Ok(())
    }

    // ── Line Items ──────────────────────────────────────────────────

    /// Append a row. Returns its ID.
    pub fn add_item(
        &mut self,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Uuid, CoreError> {
        let item = LineItem::new(description, quantity, unit_price)?;
        let id = self.invoice_service.add_item(&mut self.invoice, item);
        tracing::debug!(item_id = %id, "Line item added");
        self.dirty = true;
        Ok(id)
    }

    /// Append the empty "+ Add New Item" row (no description, 1 × 0).
    pub fn add_blank_item(&mut self) -> Uuid {
        let id = self
            .invoice_service
            .add_item(&mut self.invoice, LineItem::blank());
        tracing::debug!(item_id = %id, "Blank line item added");
        self.dirty = true;
        id
    }

    /// Remove a row by its ID and return it.
    pub fn remove_item(&mut self, item_id: Uuid) -> Result<LineItem, CoreError> {
        let removed = self.invoice_service.remove_item(&mut self.invoice, item_id)?;
        tracing::debug!(item_id = %item_id, "Line item removed");
        self.dirty = true;
        Ok(removed)
    }

    /// Replace all editable fields of a row.
    pub fn update_item(
        &mut self,
        item_id: Uuid,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<(), CoreError> {
        self.invoice_service.update_item(
            &mut self.invoice,
            item_id,
            description.into(),
            quantity,
            unit_price,
        )?;
        self.dirty = true;
        Ok(())
    }

    pub fn set_item_description(
        &mut self,
        item_id: Uuid,
        description: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.invoice_service
            .set_description(&mut self.invoice, item_id, description.into())?;
        self.dirty = true;
        Ok(())
    }

    /// Change a row's quantity; its subtotal follows.
    pub fn set_item_quantity(&mut self, item_id: Uuid, quantity: Decimal) -> Result<(), CoreError> {
        self.invoice_service
            .set_quantity(&mut self.invoice, item_id, quantity)?;
        self.dirty = true;
        Ok(())
    }

    /// Change a row's unit price; its subtotal follows.
    pub fn set_item_unit_price(
        &mut self,
        item_id: Uuid,
        unit_price: Decimal,
    ) -> Result<(), CoreError> {
        self.invoice_service
            .set_unit_price(&mut self.invoice, item_id, unit_price)?;
        self.dirty = true;
        Ok(())
    }

    /// Change a row's quantity from the quantity field's text.
    pub fn set_item_quantity_text(&mut self, item_id: Uuid, text: &str) -> Result<(), CoreError> {
        let quantity = parse_quantity(text)?;
        self.set_item_quantity(item_id, quantity)
    }

    /// Change a row's unit price from the price field's text (e.g. `"$1,250.5"`).
    pub fn set_item_unit_price_text(&mut self, item_id: Uuid, text: &str) -> Result<(), CoreError> {
        let unit_price = parse_amount("unit_price", text, self.settings.currency_prefix.as_deref())?;
        self.set_item_unit_price(item_id, unit_price)
    }

    /// Move a row to a new position in the table (clamped to the end).
    pub fn move_item(&mut self, item_id: Uuid, new_index: usize) -> Result<(), CoreError> {
        self.invoice_service
            .move_item(&mut self.invoice, item_id, new_index)?;
        self.dirty = true;
        Ok(())
    }

    #[must_use]
    pub fn get_item(&self, item_id: Uuid) -> Option<&LineItem> {
        self.invoice.item(item_id)
    }

    /// Rows in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.invoice.items
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.invoice.items.len()
    }

    // ── Totals & Formatting ─────────────────────────────────────────

    /// Σ row subtotals + VAT, recomputed on every call.
    pub fn total(&self) -> Result<Decimal, CoreError> {
        self.totals_service
            .compute_total(&self.invoice.items, self.invoice.vat)
    }

    /// The total as shown in the summary panel.
    pub fn formatted_total(&self) -> Result<String, CoreError> {
        let total = self.total()?;
        self.formatter
            .format_decimal(&total, &self.settings.total_options())
    }

    /// Raw and formatted totals.
    pub fn summary(&self) -> Result<InvoiceSummary, CoreError> {
        self.totals_service
            .summarize(&self.invoice, &self.settings, &self.formatter)
    }

    /// Format any amount with the session's money settings.
    pub fn format_amount(&self, amount: Decimal) -> Result<String, CoreError> {
        self.formatter
            .format_decimal(&amount, &self.settings.amount_options())
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Check required fields without exporting.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.invoice_service.validate_for_export(&self.invoice)
    }

    /// Build the printable document without validating (live preview).
    pub fn preview_document(&self) -> Result<PrintableInvoice, CoreError> {
        self.document_service
            .build_document(&self.invoice, &self.settings, &self.formatter)
    }

    /// Validate, then build the document for the PDF renderer.
    /// Clears the unexported-changes flag on success.
    pub fn export_document(&mut self) -> Result<PrintableInvoice, CoreError> {
        self.validate()?;
        let document = self.preview_document()?;
        tracing::debug!(
            invoice_number = %document.invoice_number,
            rows = document.rows.len(),
            total = %document.total,
            "Invoice exported"
        );
        self.dirty = false;
        Ok(document)
    }

    /// Returns `true` if the draft changed since the last successful export.
    #[must_use]
    pub fn has_unexported_changes(&self) -> bool {
        self.dirty
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Set or clear the currency prefix (e.g., "$", "€", "US $").
    pub fn set_currency_prefix(&mut self, prefix: Option<String>) {
        self.settings.currency_prefix = prefix.filter(|p| !p.is_empty());
    }

    /// Set the thousands-group width. Must be at least 1.
    pub fn set_group_size(&mut self, group_size: usize) -> Result<(), CoreError> {
        if group_size == 0 {
            return Err(CoreError::InvalidFormatOptions(
                "group_size must be at least 1".into(),
            ));
        }
        self.settings.group_size = group_size;
        Ok(())
    }

    /// Force (or stop forcing) the decimal places of the grand total.
    pub fn set_total_decimal_places(&mut self, places: Option<u32>) -> Result<(), CoreError> {
        if let Some(p) = places {
            if p > MAX_DECIMAL_PLACES {
                return Err(CoreError::InvalidFormatOptions(format!(
                    "decimal_places must be at most {MAX_DECIMAL_PLACES}, got {p}"
                )));
            }
        }
        self.settings.total_decimal_places = places;
        Ok(())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(invoice: Invoice, settings: Settings) -> Self {
        Self {
            invoice,
            settings,
            formatter: AmountFormatter::new(),
            invoice_service: InvoiceService::new(),
            totals_service: TotalsService::new(),
            document_service: DocumentService::new(),
            dirty: false,
        }
    }
}
