//! User interface module.
//!
//! This module contains all UI-related functionality, including:
//! - CLI argument parsing (cli module)
//! - Console output (output module)

pub mod cli;
pub mod output;
