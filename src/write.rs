extern crate termcolor;

use cf_problemset::error::Failure;
use std::{fmt::Display, io::Write};
use termcolor::StandardStream;

/// Print the outcome of a save; `true` on success.
pub fn write_result<E: Display>(
    stdout: &mut StandardStream,
    result: Result<(), E>,
    success: &str,
) -> bool {
    match result {
        Ok(_) => {
            write_ok!(stdout, "Success", "{}", success);
            true
        }
        Err(e) => {
            write_error!(stdout, "Error", "{}", e);
            false
        }
    }
}

pub fn write_failures(stdout: &mut StandardStream, failures: &[Failure]) {
    for f in failures {
        write_error!(stdout, "Fail", "{}", f);
    }
    if !failures.is_empty() {
        write_info!(
            stdout,
            "Info",
            "{} request(s) failed, their data is missing from the output",
            failures.len()
        );
    }
}
