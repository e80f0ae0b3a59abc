use std::num::ParseIntError;
use thiserror::Error;

/// Problems with the arguments a user supplied to a command or modal form.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    /// Key amount could not be parsed as a number.
    #[error("Amount '{value}' is not a valid number: {source}")]
    InvalidAmount {
        /// The raw value the user entered
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Key amount is outside the accepted range.
    #[error("Amount must be between {min} and {max}!")]
    AmountOutOfRange { min: u32, max: u32 },

    /// A required argument was not provided.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}
