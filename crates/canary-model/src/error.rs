use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown label kind: {0}")]
    UnknownLabelKind(String),

    #[error("invalid label selector: {0} (expected key=value)")]
    InvalidSelector(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
