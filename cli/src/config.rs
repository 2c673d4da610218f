//! Command-line and environment configuration.

use clap::Parser;
use gpa_core::{MAX_COURSES, MIN_COURSES};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "gpa")]
#[command(about = "TUI GPA calculator", long_about = None)]
pub struct Args {
    /// Write logs to this file (logging is off when unset)
    #[arg(long, env = "GPA_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "gpa_core=trace"
    #[arg(long, env = "GPA_LOG", default_value = "info")]
    pub log_level: String,

    /// Event poll interval in milliseconds
    #[arg(
        long,
        env = "GPA_TICK_RATE",
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(10..=1000)
    )]
    pub tick_rate: u64,

    /// Number of blank courses to start with
    #[arg(long, default_value_t = MIN_COURSES, value_parser = parse_course_count)]
    pub courses: usize,
}

impl Args {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate)
    }
}

fn parse_course_count(raw: &str) -> Result<usize, String> {
    let count: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a course count"))?;
    if (MIN_COURSES..=MAX_COURSES).contains(&count) {
        Ok(count)
    } else {
        Err(format!(
            "course count must be between {MIN_COURSES} and {MAX_COURSES}"
        ))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
