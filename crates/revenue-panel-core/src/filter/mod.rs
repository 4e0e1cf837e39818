pub mod engine;
pub mod selection;

pub use engine::{apply_filters, FilterOutcome, FilteredRecords};
pub use selection::FilterSelection;
