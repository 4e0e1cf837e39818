use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevenuePanelError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RevenuePanelError {
    fn from(e: serde_json::Error) -> Self {
        RevenuePanelError::SerializationError(e.to_string())
    }
}
