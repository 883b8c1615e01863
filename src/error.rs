//! Error type shared by the FizzBuzz and tomorrow tools.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The positional count could not be parsed as an integer.
    #[error("Please provide a valid number")]
    InvalidNumber {
        /// the raw argument as given on the command line
        input: String,
    },

    /// The resolved iteration count was zero or negative.
    #[error("Please provide a positive number of iterations")]
    NonPositiveCount {
        /// the rejected count
        count: i64,
    },

    /// Today is the last representable date, so there is no tomorrow.
    #[error("Tomorrow's date is out of the supported calendar range")]
    DateOutOfRange,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
