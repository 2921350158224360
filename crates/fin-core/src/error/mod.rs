pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid account kind: {value} {location}")]
    InvalidAccountKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid category kind: {value} {location}")]
    InvalidCategoryKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid transaction kind: {value} {location}")]
    InvalidTransactionKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
