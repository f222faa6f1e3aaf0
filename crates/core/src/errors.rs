use thiserror::Error;

/// Unified error type for the entire invoice-builder-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Numeric input ───────────────────────────────────────────────
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Amount out of representable range: {0}")]
    AmountOutOfRange(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    // ── Formatting ──────────────────────────────────────────────────
    #[error("Invalid format options: {0}")]
    InvalidFormatOptions(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Invoice validation failed: {0}")]
    ValidationError(String),

    #[error("Line item not found: {0}")]
    ItemNotFound(String),

    // ── Snapshot (JSON) ─────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Shorthand for a labeled numeric input failure.
    pub fn invalid_number(field: impl Into<String>, value: impl ToString) -> Self {
        CoreError::InvalidNumber {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
