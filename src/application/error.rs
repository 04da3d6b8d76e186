use thiserror::Error;

use crate::domain::ParseAmountError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please enter an amount")]
    EmptyAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<ParseAmountError> for AppError {
    fn from(err: ParseAmountError) -> Self {
        match err {
            ParseAmountError::Empty => AppError::EmptyAmount,
            ParseAmountError::InvalidFormat => AppError::InvalidAmount(err.to_string()),
        }
    }
}
