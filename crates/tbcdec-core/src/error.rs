use thiserror::Error;

#[derive(Error, Debug)]
pub enum TbcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid video parameters: {0}")]
    InvalidVideoParameters(String),

    #[error("Invalid filter coefficients: {0}")]
    InvalidFilter(String),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Invalid decode config: {0}")]
    InvalidConfig(String),

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Field has {actual} samples, expected {expected}")]
    FieldSizeMismatch { expected: usize, actual: usize },

    #[error("Decode aborted")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, TbcError>;
