use compound_domain::UnknownCategory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Corrupt data: {0}")]
    CorruptData(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<UnknownCategory> for CoreError {
    fn from(err: UnknownCategory) -> Self {
        CoreError::Validation(err.to_string())
    }
}

