//! FizzBuzz for 1 through 100, without any options.

use fizzbuzz_tomorrow::fizzbuzz::{DEFAULT_COUNT, write_sequence};
use std::io;

fn main() {
    // nothing to recover from; a closed stdout just ends the run
    let _ = write_sequence(io::stdout().lock(), DEFAULT_COUNT);
}
