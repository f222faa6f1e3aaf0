pub mod document_service;
pub mod invoice_service;
pub mod totals_service;
