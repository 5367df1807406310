// src/lib.rs

pub mod error;
pub mod exercise;
pub mod report;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm_api;

pub use error::{FractionError, Result};
pub use types::fraction::Fraction;
