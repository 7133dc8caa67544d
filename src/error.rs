use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgebraError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("divide by zero")]
    DivideByZero,
    #[error("no solution")]
    NoSolution,
    #[error("unsupported equation: {0}")]
    UnsupportedEquation(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl AlgebraError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AlgebraError::InvalidArgument(msg.into())
    }
}
