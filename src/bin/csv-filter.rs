use std::env;
use std::process::ExitCode;

use csv_prep::{filter, PrepError};

/// Keep only the rows of `<file>.csv` whose integer value in `field`
/// equals `value`; write them (plus the header) to
/// `<file>-<field>-<value>.csv` and print the match count.
///
/// Exit codes: 0 success, 1 wrong argument count, 2 field not found,
/// 3 any other failure.
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        println!("Usage: {} file(.csv) field value", args[0]);
        return ExitCode::from(1);
    }

    let value: i64 = match args[3].parse() {
        Ok(v) => v,
        Err(_) => {
            println!("value '{}' is not an integer", args[3]);
            return ExitCode::from(3);
        }
    };

    match filter::run(&args[1], &args[2], value) {
        Ok(matches) => {
            println!("{matches} lines written");
            ExitCode::SUCCESS
        }
        Err(err @ PrepError::FieldNotFound(_)) => {
            println!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            println!("{err}");
            ExitCode::from(3)
        }
    }
}
