//! Error types for intent-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntentError {
    #[error("Invalid date phrase: {0}")]
    InvalidPhrase(String),

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, IntentError>;
