//! Command-line argument handling.

use std::process;

use getopts::Options;

use cal_core::Year;

/// Year used when none is given on the command line.
pub const DEFAULT_YEAR: Year = 2026;

/// Parsed command-line arguments.
pub struct Args {
    /// Target year for all generated calendars.
    pub year: Year,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts
}

/// Parse command-line arguments (without the program name).
///
/// The only positional argument is an optional target year. An
/// unusable year (non-numeric, or below 1) falls back to
/// [`DEFAULT_YEAR`] with a warning on standard output. Malformed
/// option syntax exits the process with a diagnostic; `--help` prints
/// usage and exits cleanly.
pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!(
            "{}",
            opts.usage(&opts.short_usage(concat!(env!("CARGO_PKG_NAME"), " [YEAR]")))
        );
        process::exit(0);
    }

    let year = match matches.free.first() {
        Some(raw) => match raw.parse::<Year>() {
            Ok(year) if year >= 1 => year,
            _ => {
                println!("Invalid year argument, using default year {DEFAULT_YEAR}");
                DEFAULT_YEAR
            }
        },
        None => DEFAULT_YEAR,
    };

    Args { year }
}
