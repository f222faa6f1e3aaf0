use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::invoice::Invoice;
use crate::models::line_item::LineItem;

/// Date format produced by the form's date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Edits the rows of an invoice draft and checks it before export.
///
/// Pure business logic: no I/O. Every edit either applies fully or
/// leaves the invoice untouched.
pub struct InvoiceService;

impl InvoiceService {
    pub fn new() -> Self {
        Self
    }

    /// Append a row at the end of the table.
    pub fn add_item(&self, invoice: &mut Invoice, item: LineItem) -> Uuid {
        let id = item.id;
        invoice.items.push(item);
        id
    }

    /// Remove a row and hand it back.
    pub fn remove_item(&self, invoice: &mut Invoice, item_id: Uuid) -> Result<LineItem, CoreError> {
        let idx = Self::position(invoice, item_id)?;
        Ok(invoice.items.remove(idx))
    }

    /// Replace description, quantity and price of a row in one step.
    pub fn update_item(
        &self,
        invoice: &mut Invoice,
        item_id: Uuid,
        description: String,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<(), CoreError> {
        let item = Self::item_mut(invoice, item_id)?;
        item.set_quantity_and_price(quantity, unit_price)?;
        item.description = description;
        Ok(())
    }

    pub fn set_quantity(
        &self,
        invoice: &mut Invoice,
        item_id: Uuid,
        quantity: Decimal,
    ) -> Result<(), CoreError> {
        Self::item_mut(invoice, item_id)?.set_quantity(quantity)
    }

    pub fn set_unit_price(
        &self,
        invoice: &mut Invoice,
        item_id: Uuid,
        unit_price: Decimal,
    ) -> Result<(), CoreError> {
        Self::item_mut(invoice, item_id)?.set_unit_price(unit_price)
    }

    pub fn set_description(
        &self,
        invoice: &mut Invoice,
        item_id: Uuid,
        description: String,
    ) -> Result<(), CoreError> {
        Self::item_mut(invoice, item_id)?.description = description;
        Ok(())
    }

    /// Move a row to `new_index`, clamped to the end of the table.
    pub fn move_item(
        &self,
        invoice: &mut Invoice,
        item_id: Uuid,
        new_index: usize,
    ) -> Result<(), CoreError> {
        let idx = Self::position(invoice, item_id)?;
        let item = invoice.items.remove(idx);
        let target = new_index.min(invoice.items.len());
        invoice.items.insert(target, item);
        Ok(())
    }

    /// Check that the invoice can be exported.
    ///
    /// Rules:
    /// - Invoice number, issue date, due date, from and to are required
    /// - Dates must be `YYYY-MM-DD`
    /// - Every row needs a description
    ///
    /// All problems are reported together, one per line.
    pub fn validate_for_export(&self, invoice: &Invoice) -> Result<(), CoreError> {
        let mut problems: Vec<String> = Vec::new();

        let required = [
            ("Invoice number", &invoice.invoice_number),
            ("From", &invoice.from),
            ("To", &invoice.to),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                problems.push(format!("{label} is required"));
            }
        }

        for (label, value) in [("Issue date", &invoice.issue_date), ("Due date", &invoice.due_date)] {
            let value = value.trim();
            if value.is_empty() {
                problems.push(format!("{label} is required"));
            } else if NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
                problems.push(format!("{label} '{value}' is not a valid YYYY-MM-DD date"));
            }
        }

        for (idx, item) in invoice.items.iter().enumerate() {
            if item.description.trim().is_empty() {
                problems.push(format!("Item {} needs a description", idx + 1));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CoreError::ValidationError(problems.join("\n")))
        }
    }

    fn position(invoice: &Invoice, item_id: Uuid) -> Result<usize, CoreError> {
        invoice
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }

    fn item_mut(invoice: &mut Invoice, item_id: Uuid) -> Result<&mut LineItem, CoreError> {
        invoice
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }
}

impl Default for InvoiceService {
    fn default() -> Self {
        Self::new()
    }
}
