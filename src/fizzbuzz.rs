//! FizzBuzz classification and sequence printing.

use std::io::{self, BufWriter, Write};
use std::ops::RangeInclusive;

/// Number of iterations printed when no count is given.
pub const DEFAULT_COUNT: u64 = 100;

/// Evaluates a single number and returns its FizzBuzz string.
///
/// Multiples of 15 are checked before multiples of 3 and 5, so the result is
/// `"FizzBuzz"`, `"Fizz"`, `"Buzz"` or the decimal form of `n`. Every `i64` is
/// accepted, zero and negatives included.
///
/// # Examples
/// ```
/// use fizzbuzz_tomorrow::fizzbuzz::fizzbuzz;
///
/// assert_eq!(fizzbuzz(9), "Fizz");
/// assert_eq!(fizzbuzz(7), "7");
/// ```
pub fn fizzbuzz(n: i64) -> String {
    if n % 15 == 0 {
        String::from("FizzBuzz")
    } else if n % 3 == 0 {
        String::from("Fizz")
    } else if n % 5 == 0 {
        String::from("Buzz")
    } else {
        n.to_string()
    }
}

/// Numbers visited for `count`, capped at `i64::MAX`.
fn bounds(count: u64) -> RangeInclusive<i64> {
    1..=i64::try_from(count).unwrap_or(i64::MAX)
}

/// Yields the classification of `1..=count` in increasing order.
///
/// Counts above `i64::MAX` stop at `i64::MAX` instead of wrapping.
pub fn sequence(count: u64) -> impl Iterator<Item = String> {
    bounds(count).map(fizzbuzz)
}

/// Writes the sequence for `1..=count` to `out`, one item per line.
pub fn write_sequence<W: Write>(out: W, count: u64) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for item in sequence(count) {
        writeln!(out, "{}", item)?;
    }
    out.flush()
}
