// src/bin/fraction_check.rs
//
// Prints the operator exercise report. Exits with status 1 if any check fails.

use std::process::ExitCode;

fn main() -> ExitCode {
    match fraction_core::exercise::run() {
        Ok(report) => {
            print!("{}", report);
            if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                eprintln!("{} of {} checks failed", report.failed(), report.passed() + report.failed());
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
