// src/report.rs
//
// PASS/FAIL check lines for the exercise driver.
//
//   One third times two                     : PASS    2/3
//   athird  <= afourth                      : ** FAIL **    true

use std::fmt::{self, Display};

const LABEL_WIDTH: usize = 40;

/// Formats one check line: the label padded to 40 columns, the verdict, and
/// the actual result.
pub fn check_line<T: Display>(what: &str, result: &T, passed: bool) -> String {
    format!(
        "{:<width$}: {}    {}",
        what,
        if passed { "PASS" } else { "** FAIL **" },
        result,
        width = LABEL_WIDTH
    )
}

#[derive(Debug, Default, Clone)]
pub struct CheckReport {
    lines: Vec<String>,
    passed: usize,
    failed: usize,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a plain output line that is not a check.
    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Compares `result` against `expected` and records the line.
    /// Returns whether the check passed.
    pub fn check<T>(&mut self, what: &str, result: T, expected: T) -> bool
    where
        T: PartialEq + Display,
    {
        let passed = result == expected;
        if passed {
            self.passed += 1;
        } else {
            log::debug!("check failed: {} (expected {}, got {})", what, expected, result);
            self.failed += 1;
        }
        self.lines.push(check_line(what, &result, passed));
        passed
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
