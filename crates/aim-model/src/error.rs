use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid field '{key}': {reason}")]
    InvalidField { key: String, reason: String },
    #[error("invalid column reference: {0}")]
    InvalidColumnRef(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
