use crate::errors::CoreError;
use crate::formatting::AmountFormatter;
use crate::models::document::{PrintableInvoice, PrintableRow};
use crate::models::invoice::Invoice;
use crate::models::settings::Settings;

use super::totals_service::TotalsService;

/// Builds the display-ready document handed to the PDF renderer.
///
/// Money cells go through `AmountFormatter` with the session settings;
/// the grand total uses `Settings::total_options` (cents by default).
pub struct DocumentService {
    totals_service: TotalsService,
}

impl DocumentService {
    pub fn new() -> Self {
        Self {
            totals_service: TotalsService::new(),
        }
    }

    pub fn build_document(
        &self,
        invoice: &Invoice,
        settings: &Settings,
        formatter: &AmountFormatter,
    ) -> Result<PrintableInvoice, CoreError> {
        let amount_options = settings.amount_options();

        let rows = invoice
            .items
            .iter()
            .map(|item| {
                Ok(PrintableRow {
                    description: item.description.clone(),
                    quantity: item.quantity().normalize().to_string(),
                    unit_price: formatter.format_decimal(&item.unit_price(), &amount_options)?,
                    subtotal: formatter.format_decimal(&item.subtotal(), &amount_options)?,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        let total = self.totals_service.compute_total(&invoice.items, invoice.vat)?;

        Ok(PrintableInvoice {
            invoice_number: invoice.invoice_number.clone(),
            issue_date: invoice.issue_date.clone(),
            due_date: invoice.due_date.clone(),
            from: invoice.from.clone(),
            to: invoice.to.clone(),
            rows,
            vat: formatter.format_decimal(&invoice.vat, &amount_options)?,
            total: formatter.format_decimal(&total, &settings.total_options())?,
            payment_details: invoice.payment_details.clone(),
            additional_notes: invoice.additional_notes.clone(),
        })
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new()
    }
}
