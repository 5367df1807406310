// src/error.rs
//
// Error type shared by every fallible fraction operation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A denominator of zero was given to a constructor or found in parsed text.
    #[error("zero denominator")]
    ZeroDenominator,
    /// The reduced result of an arithmetic operation does not fit in `u64`.
    #[error("fraction overflow: {numerator}/{denominator} does not fit in u64")]
    Overflow { numerator: u128, denominator: u128 },
    #[error("invalid fraction literal: {0}")]
    Parse(String),
}

impl FractionError {
    pub fn parse_error(input: &str) -> Self {
        FractionError::Parse(format!("'{}'", input))
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(self, FractionError::ZeroDenominator)
    }
}
