use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown check format: expected an array of checks, got {0}")]
    InvalidInput(String),

    #[error("failed to decode checks: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CoreError {
    /// Short, low-cardinality category for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            CoreError::InvalidInput(_) => "invalid_input",
            CoreError::Decode(_) => "decode",
        }
    }
}
