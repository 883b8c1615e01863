//! FizzBuzz sequence generation and tomorrow's date formatting.
//!
//! The two tools are unrelated; they share only the CLI, error and logging
//! plumbing.

pub mod error;
pub mod fizzbuzz;
pub mod logging;
pub mod tomorrow;
pub mod ui;

pub use error::{Error, Result};
