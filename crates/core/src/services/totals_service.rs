use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::formatting::AmountFormatter;
use crate::models::invoice::Invoice;
use crate::models::line_item::LineItem;
use crate::models::settings::Settings;
use crate::models::summary::InvoiceSummary;

/// Aggregates line items and VAT into invoice totals.
///
/// Pure business logic with exact decimal arithmetic, so
/// `compute_total(items, vat) - vat == Σ subtotal` holds exactly.
pub struct TotalsService;

impl TotalsService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of the stored row subtotals. `LineItem` keeps them fresh.
    pub fn items_subtotal(&self, items: &[LineItem]) -> Result<Decimal, CoreError> {
        items.iter().try_fold(Decimal::ZERO, |acc, item| {
            exact_add(acc, item.subtotal()).ok_or_else(|| {
                CoreError::Overflow(format!("item sum exceeds range at item {}", item.id))
            })
        })
    }

    /// total = Σ item.subtotal + vat
    pub fn compute_total(&self, items: &[LineItem], vat: Decimal) -> Result<Decimal, CoreError> {
        let subtotal = self.items_subtotal(items)?;
        exact_add(subtotal, vat)
            .ok_or_else(|| CoreError::Overflow(format!("{subtotal} + VAT {vat}")))
    }

    /// Raw and formatted totals for the summary panel.
    pub fn summarize(
        &self,
        invoice: &Invoice,
        settings: &Settings,
        formatter: &AmountFormatter,
    ) -> Result<InvoiceSummary, CoreError> {
        let subtotal = self.items_subtotal(&invoice.items)?;
        let total = self.compute_total(&invoice.items, invoice.vat)?;
        let amount_options = settings.amount_options();

        Ok(InvoiceSummary {
            item_count: invoice.items.len(),
            subtotal,
            vat: invoice.vat,
            total,
            formatted_subtotal: formatter.format_decimal(&subtotal, &amount_options)?,
            formatted_vat: formatter.format_decimal(&invoice.vat, &amount_options)?,
            formatted_total: formatter.format_decimal(&total, &settings.total_options())?,
        })
    }
}

/// `a + b`, or `None` if the sum overflows or loses digits to rounding.
fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    let sum = a.checked_add(b)?;
    (sum.checked_sub(a)? == b).then_some(sum)
}

impl Default for TotalsService {
    fn default() -> Self {
        Self::new()
    }
}
