pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod types;

pub use error::RevenuePanelError;
pub use types::*;

/// Standard result type for all revenue-panel operations
pub type RevenuePanelResult<T> = Result<T, RevenuePanelError>;
