//! The calculate action of the loan screen.
//!
//! Takes the three raw text fields as typed by the user, validates them,
//! runs the simulation and renders the two-line result message. Any field
//! that fails to parse produces the fixed validation message instead; parse
//! failures never surface as errors past this boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::currency::format_brl;
use crate::installment::{LoanInput, LoanQuote, simulate_loan};

/// Fixed message shown whenever any field is missing or fails to parse.
pub const VALIDATION_MESSAGE: &str = "Preencha todos os campos";

/// Raw text fields as collected from the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The amount to be borrowed.
    pub principal: String,
    /// The monthly interest rate, as a percentage.
    pub interest_per_month: String,
    /// The number of monthly payments.
    pub term_months: String,
}

/// Outcome of the calculate action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteOutcome {
    /// All three fields parsed and the quote was computed.
    Quoted { quote: LoanQuote, message: String },
    /// At least one field was invalid; nothing was computed.
    Invalid { message: String },
}

impl QuoteOutcome {
    /// The user-facing message: either the two result lines or the
    /// validation message.
    pub fn message(&self) -> &str {
        match self {
            QuoteOutcome::Quoted { message, .. } | QuoteOutcome::Invalid { message } => message,
        }
    }

    /// The computed quote, if the request was valid.
    pub fn quote(&self) -> Option<&LoanQuote> {
        match self {
            QuoteOutcome::Quoted { quote, .. } => Some(quote),
            QuoteOutcome::Invalid { .. } => None,
        }
    }
}

/// Runs the calculate action over raw text inputs.
///
/// Principal and rate must parse as decimal numbers and the term as an
/// integer number of months greater than zero; otherwise the outcome carries
/// the fixed validation message.
pub fn quote(request: &QuoteRequest) -> QuoteOutcome {
    let principal = request.principal.parse::<Decimal>().ok();
    let interest = request.interest_per_month.parse::<Decimal>().ok();
    let months = request.term_months.parse::<u32>().ok();

    let (Some(principal), Some(interest), Some(months)) = (principal, interest, months) else {
        debug!("quote rejected: unparsable field");
        return QuoteOutcome::Invalid {
            message: VALIDATION_MESSAGE.to_string(),
        };
    };

    let input = LoanInput {
        principal,
        interest_per_month: interest,
        term_months: months,
    };

    match simulate_loan(input) {
        Ok(loan_quote) => {
            debug!(
                "quote computed: principal={} rate={}% months={}",
                principal, interest, months
            );
            QuoteOutcome::Quoted {
                message: render_message(&loan_quote),
                quote: loan_quote,
            }
        }
        // Zero-month terms fall in here and read as a validation failure,
        // same as an unparsable field
        Err(_) => {
            debug!("quote rejected: term of {} months", months);
            QuoteOutcome::Invalid {
                message: VALIDATION_MESSAGE.to_string(),
            }
        }
    }
}

fn render_message(quote: &LoanQuote) -> String {
    format!(
        "Valor das parcelas: {}\nValor total pago no final: {}",
        format_brl(quote.installment),
        format_brl(quote.total_paid),
    )
}
