//! Command-line entry point: generates the work, time-off, and
//! all-days calendar views for the requested year.
//!
//! Creation failures are reported on the error stream but never abort
//! the run; the process exits 0 once all three views were attempted.

use std::env;
use std::process;

use cal_time::HolidaySet;

use calgen::generate::{generate_calendar, CalendarKind, CalendarRun};
use calgen::report::Report;
use calgen::{cli, DEFAULT_HOLIDAYS};

fn main() {
    let args = cli::parse(env::args().skip(1).collect());

    let holidays = match HolidaySet::resolve(args.year, DEFAULT_HOLIDAYS) {
        Ok(holidays) => holidays,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    for kind in [CalendarKind::Work, CalendarKind::TimeOff, CalendarKind::All] {
        println!("Generating {} calendar...", kind.label());

        let run = CalendarRun::for_year(kind, args.year);
        let weekend_days = generate_calendar(&run, &holidays);

        if let Some(report_kind) = kind.report_kind() {
            match Report::compute(report_kind, weekend_days, &holidays).write(&run.base_dir) {
                Ok(path) => println!("Report generated at: {}", path.display()),
                Err(err) => eprintln!("{err}"),
            }
        }
    }

    println!("All calendars for {} created successfully.", args.year);
}
