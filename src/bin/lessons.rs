use std::io;
use std::process::ExitCode;

use pattern_lessons::{logging, run_lessons, CourseConfig};

fn main() -> ExitCode {
    let config = match CourseConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::from(2);
        }
    };
    logging::init_logger(&config.log_filter);

    let names: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_lessons(&names, &config, &mut out) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(summary) => {
            tracing::warn!(failed = summary.failed.len(), "some lessons failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}
