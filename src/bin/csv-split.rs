use std::env;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use csv_prep::split;

/// Randomly partition `<file>.csv` into `<file>-test.csv` and
/// `<file>-training.csv`, moving `floor(total_lines * ratio)` data rows
/// into the test set; print the sample count.
///
/// Exit codes: 0 success, 1 wrong argument count, 3 any other failure.
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        println!("Usage: {} file(.csv) ratio", args[0]);
        return ExitCode::from(1);
    }

    let ratio: f64 = match args[2].parse() {
        Ok(r) => r,
        Err(_) => {
            println!("ratio '{}' is not a number", args[2]);
            return ExitCode::from(3);
        }
    };

    let mut rng = StdRng::from_entropy();
    match split::run(&args[1], ratio, &mut rng) {
        Ok(nsample) => {
            println!("{nsample} samples written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::from(3)
        }
    }
}
