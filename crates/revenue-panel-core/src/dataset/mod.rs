pub mod columns;
pub mod store;

pub use columns::{normalize_label, ColumnMap, REQUIRED_COLUMNS};
pub use store::{RecordField, RecordStore};
