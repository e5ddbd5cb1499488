//! `br_loan` is a Rust library for simulating fixed-rate loans in Brazil.
//!
//! Given a principal, a monthly interest rate and a term in months, it
//! computes the fixed monthly installment of an amortizing loan (the payment
//! of the **Price table**, also known as the French amortization system) and
//! the total amount paid at the end of the term, and renders both using
//! Brazilian Real formatting.
//!
//! ## Usage
//!
//! Add `br_loan` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! br_loan = "0.1.0"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then, use the `simulate_loan` function to get the installment and the
//! total paid, and `format_brl` to display them:
//!
//! ```rust
//! use br_loan::{simulate_loan, format_brl, LoanInput};
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let input = LoanInput {
//!         principal: dec!(1000),
//!         interest_per_month: dec!(2),
//!         term_months: 12,
//!     };
//!
//!     match simulate_loan(input) {
//!         Ok(quote) => {
//!             println!("Installment: {}", format_brl(quote.installment));
//!             println!("Total paid:  {}", format_brl(quote.total_paid));
//!         }
//!         Err(e) => {
//!             eprintln!("Error simulating loan: {}", e);
//!         }
//!     }
//! }
//! ```
//!
//! The `quote` module exposes the same flow starting from raw text fields,
//! with the validation behavior expected by the loan screen.

pub mod currency;
pub mod error;
pub mod installment;
pub mod quote;

pub use currency::format_brl;
pub use error::{LoanError, Result};
pub use installment::{
    LoanInput, LoanQuote, calculate_installment, normalize_monthly_interest_rate, simulate_loan,
    total_paid,
};
pub use quote::{QuoteOutcome, QuoteRequest, VALIDATION_MESSAGE, quote};
