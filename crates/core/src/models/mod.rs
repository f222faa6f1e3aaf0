pub mod document;
pub mod invoice;
pub mod line_item;
pub mod settings;
pub mod summary;
