use fizzbuzz_tomorrow::error::Error;
use fizzbuzz_tomorrow::fizzbuzz::write_sequence;
use fizzbuzz_tomorrow::logging;
use fizzbuzz_tomorrow::ui::cli::{FizzBuzzArgs, parse_args, resolve_count};
use std::io::{self, ErrorKind};
use std::process;

fn main() {
    logging::init();

    let args: FizzBuzzArgs = parse_args();

    let count = match resolve_count(&args) {
        Ok(count) => count,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    if let Err(e) = write_sequence(stdout.lock(), count) {
        // the reader went away (e.g. `| head`), nothing left to report
        if e.kind() == ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("{}", Error::from(e));
        process::exit(1);
    }
}
