use fizzbuzz_tomorrow::logging;
use fizzbuzz_tomorrow::tomorrow::Tomorrow;
use fizzbuzz_tomorrow::ui::cli::{TomorrowArgs, parse_args};
use fizzbuzz_tomorrow::ui::output::print_tomorrow_report;
use std::io;

fn main() {
    logging::init();

    let args: TomorrowArgs = parse_args();

    print_tomorrow_report(&mut io::stdout().lock(), Tomorrow::now(), args.json);
}
