//! Fixed-payment installment calculation (Price table).

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{LoanError, Result};

/// Input parameters for a loan simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// The principal amount borrowed.
    pub principal: Decimal,
    /// The monthly interest rate as a percentage (e.g., 2 for 2% per month).
    pub interest_per_month: Decimal,
    /// The total number of monthly payments.
    pub term_months: u32,
}

/// Contains the results of a loan simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuote {
    /// The fixed monthly installment, rounded to cents.
    pub installment: Decimal,
    /// The total amount paid over the lifetime of the loan.
    pub total_paid: Decimal,
}

/// Normalizes a monthly interest rate percentage to a decimal fraction.
///
/// This function converts a rate like 2% per month into the 0.02 multiplier
/// used by the installment formula.
pub fn normalize_monthly_interest_rate(input: Decimal) -> Decimal {
    input / Decimal::from_str_exact("100.0").unwrap()
}

/// Simulates a fixed-rate loan.
///
/// This is the main entry point of the library. It takes the loan parameters
/// and returns the fixed monthly installment together with the total paid at
/// the end of the term. The total is computed on the already-rounded
/// installment, so it always equals installment times months exactly.
///
/// # Arguments
///
/// * `input` - A `LoanInput` struct containing the principal, the monthly rate
///   as a percentage, and the term in months.
///
/// # Errors
///
/// Returns an error if `term_months` is zero.
pub fn simulate_loan(input: LoanInput) -> Result<LoanQuote> {
    // Convert percentage to monthly decimal fraction
    let monthly_interest_rate = normalize_monthly_interest_rate(input.interest_per_month);

    let installment = calculate_installment(
        input.principal,
        monthly_interest_rate,
        input.term_months,
    )?;

    Ok(LoanQuote {
        installment,
        total_paid: total_paid(installment, input.term_months),
    })
}

/// Calculates the fixed monthly installment using the Price table formula.
///
/// The Price table formula is: PMT = P * i / (1 - (1 + i)^-n)
///
/// The result is rounded to cents using banker's rounding (half to even).
/// A zero interest rate is treated as an interest-free loan, splitting the
/// principal evenly across the term.
///
/// # Arguments
///
/// * `principal` - The principal loan amount.
/// * `monthly_interest_rate` - The effective monthly interest rate as a decimal (not percentage).
/// * `term_months` - The total number of payments.
///
/// # Errors
///
/// Returns an error if `term_months` is zero.
pub fn calculate_installment(
    principal: Decimal,
    monthly_interest_rate: Decimal,
    term_months: u32,
) -> Result<Decimal> {
    if term_months == 0 {
        return Err(LoanError::ZeroTerm.into());
    }

    if monthly_interest_rate.is_zero() {
        let installment = principal / Decimal::from(term_months);
        return Ok(installment.round_dp(2));
    }

    // PMT = P * i / (1 - (1 + i)^-n), rewritten over (1 + i)^n to keep the
    // exponentiation exact in decimal arithmetic
    let i_plus_1_pow_n = (dec!(1) + monthly_interest_rate).powu(term_months.into());
    let installment =
        principal * (monthly_interest_rate * i_plus_1_pow_n) / (i_plus_1_pow_n - dec!(1));

    Ok(installment.round_dp(2))
}

/// Total amount paid at the end of the loan for a given installment.
pub fn total_paid(installment: Decimal, term_months: u32) -> Decimal {
    installment * Decimal::from(term_months)
}
