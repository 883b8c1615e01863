//! Command-line interface module.
//!
//! This module holds the clap argument definitions for the binaries and the
//! rules for turning them into an iteration count.

use crate::error::{Error, Result};
use crate::fizzbuzz::DEFAULT_COUNT;
use clap::Parser;
use std::process;
use tracing::{debug, warn};

/// CLI arguments for the FizzBuzz sequence generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct FizzBuzzArgs {
    /// Number of iterations for FizzBuzz (default: 100)
    #[arg(short = 'c', long = "count", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Number of iterations, used only when --count is not given
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    pub positional: Option<String>,
}

/// CLI arguments for the tomorrow date formatter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct TomorrowArgs {
    /// Print both renderings as a JSON object
    #[arg(short = 'j', long = "json")]
    pub json: bool,
}

/// Parses the process arguments, exiting with status 1 on invalid input.
///
/// `--help` and `--version` are printed and exit with status 0 as usual.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    }
}

/// Resolves the iteration count from the parsed arguments.
///
/// The count is taken from:
/// 1. The `--count` flag, if given
/// 2. The positional argument, if given
/// 3. [`DEFAULT_COUNT`] otherwise
///
/// # Errors
/// - [`Error::InvalidNumber`] if the positional argument is not an integer
/// - [`Error::NonPositiveCount`] if the resolved count is zero or negative
pub fn resolve_count(args: &FizzBuzzArgs) -> Result<u64> {
    let count = match (args.count, args.positional.as_deref()) {
        (Some(count), positional) => {
            if let Some(ignored) = positional {
                warn!(ignored, "--count was given, ignoring positional count");
            }
            count
        }
        (None, Some(raw)) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidNumber {
                input: raw.to_string(),
            })?,
        (None, None) => return Ok(DEFAULT_COUNT),
    };

    if count <= 0 {
        return Err(Error::NonPositiveCount { count });
    }

    debug!(count, "resolved iteration count");
    Ok(count as u64)
}
