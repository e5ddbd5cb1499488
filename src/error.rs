//! Error handling for loan simulations.
//!
//! Defines the library error type and a unified Result alias using anyhow
//! for context chaining and error propagation.

use thiserror::Error;

/// Errors produced by the simulation entry points.
///
/// Unparsable user input is not an error: the quote layer reports it as a
/// validation outcome instead (see [`crate::quote::QuoteOutcome`]).
#[derive(Error, Debug)]
pub enum LoanError {
    #[error("term must be at least one month")]
    ZeroTerm,
}

/// Result type alias for loan operations.
pub type Result<T> = anyhow::Result<T>;
