//! Error types for date expansion.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, ExpandError>;
