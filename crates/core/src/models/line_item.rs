use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::formatting::decimals::decimal_from_f64;

/// Description used for the row every new invoice starts with.
pub const SAMPLE_ITEM_DESCRIPTION: &str = "Sample Item";

/// A single invoice row.
///
/// **Important**: `subtotal` is derived. It is computed on construction and
/// on every change of quantity or unit price, and can only be read. Imported
/// items recompute it and ignore whatever value was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineItemRecord")]
pub struct LineItem {
    /// Unique identifier (stable across edits and reordering)
    pub id: Uuid,

    /// Free-text description printed in the first column
    pub description: String,

    quantity: Decimal,
    unit_price: Decimal,
    subtotal: Decimal,
}

impl LineItem {
    /// Create a row. Quantity must not be negative.
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, CoreError> {
        validate_quantity(quantity)?;
        let subtotal = calculate_subtotal(quantity, unit_price)?;
        Ok(Self {
            id: Uuid::new_v4(),
            description: description.into(),
            quantity,
            unit_price,
            subtotal,
        })
    }

    /// Create a row from float inputs, rejecting NaN and infinities.
    pub fn from_f64(
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Result<Self, CoreError> {
        let quantity = decimal_from_f64("quantity", quantity)?;
        let unit_price = decimal_from_f64("unit_price", unit_price)?;
        Self::new(description, quantity, unit_price)
    }

    /// The empty row appended by "+ Add New Item": no description, 1 × 0.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
            subtotal: Decimal::ZERO,
        }
    }

    /// The row a fresh invoice starts with: 40 × 20 = 800.
    pub fn sample() -> Self {
        let quantity = Decimal::from(40);
        let unit_price = Decimal::from(20);
        Self {
            id: Uuid::new_v4(),
            description: SAMPLE_ITEM_DESCRIPTION.to_string(),
            quantity,
            unit_price,
            subtotal: quantity * unit_price,
        }
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// quantity × unit_price, always in sync with both.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Change the quantity and recompute the subtotal.
    /// On error the item is left untouched.
    pub fn set_quantity(&mut self, quantity: Decimal) -> Result<(), CoreError> {
        validate_quantity(quantity)?;
        self.subtotal = calculate_subtotal(quantity, self.unit_price)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Change the unit price and recompute the subtotal.
    /// On error the item is left untouched.
    pub fn set_unit_price(&mut self, unit_price: Decimal) -> Result<(), CoreError> {
        self.subtotal = calculate_subtotal(self.quantity, unit_price)?;
        self.unit_price = unit_price;
        Ok(())
    }

    /// Change both at once (one recomputation, all-or-nothing).
    pub fn set_quantity_and_price(
        &mut self,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<(), CoreError> {
        validate_quantity(quantity)?;
        self.subtotal = calculate_subtotal(quantity, unit_price)?;
        self.quantity = quantity;
        self.unit_price = unit_price;
        Ok(())
    }
}

fn validate_quantity(quantity: Decimal) -> Result<(), CoreError> {
    if quantity.is_sign_negative() && !quantity.is_zero() {
        return Err(CoreError::ValidationError(format!(
            "Quantity must not be negative (got {quantity})"
        )));
    }
    Ok(())
}

fn calculate_subtotal(quantity: Decimal, unit_price: Decimal) -> Result<Decimal, CoreError> {
    quantity
        .checked_mul(unit_price)
        .ok_or_else(|| CoreError::Overflow(format!("{quantity} × {unit_price}")))
}

/// Wire shape of a line item. `subtotal` is accepted but never trusted.
#[derive(Deserialize)]
struct LineItemRecord {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    #[serde(default)]
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    #[serde(default)]
    subtotal: Option<Decimal>,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = CoreError;

    fn try_from(record: LineItemRecord) -> Result<Self, Self::Error> {
        let mut item = LineItem::new(record.description, record.quantity, record.unit_price)?;
        item.id = record.id;
        if let Some(stored) = record.subtotal {
            if stored != item.subtotal {
                tracing::warn!(
                    item_id = %item.id,
                    stored = %stored,
                    computed = %item.subtotal,
                    "Discarding stale subtotal on imported line item"
                );
            }
        }
        Ok(item)
    }
}
