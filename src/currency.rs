//! Brazilian Real display formatting.

use rust_decimal::Decimal;

/// Formats a value as Brazilian Real: `R$` symbol, `.` for thousands,
/// `,` for decimals.
///
/// Whole amounts omit the cents suffix, matching the loan screen display:
/// `1000.00` renders as `"R$1.000"` while `1000.50` renders as
/// `"R$1.000,50"`.
///
/// # Examples
/// ```
/// use br_loan::format_brl;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_brl(dec!(1234.56)), "R$1.234,56");
/// assert_eq!(format_brl(dec!(1000)), "R$1.000");
/// ```
pub fn format_brl(value: Decimal) -> String {
    let is_negative = value < Decimal::ZERO;
    let abs_value = value.abs().round_dp(2);

    let formatted = format!("{:.2}", abs_value);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = parts.get(1).unwrap_or(&"00");

    // Add thousands separators (.) to integer part
    let with_separators: String = integer_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec!['.', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let sign = if is_negative { "-" } else { "" };

    if *decimal_part == "00" {
        format!("R${}{}", sign, with_separators)
    } else {
        format!("R${}{},{}", sign, with_separators, decimal_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1000.00), "R$1.000")]
    #[case(dec!(1000.50), "R$1.000,50")]
    #[case(dec!(94.56), "R$94,56")]
    #[case(dec!(100.00), "R$100")]
    #[case(dec!(0), "R$0")]
    #[case(dec!(0.01), "R$0,01")]
    #[case(dec!(1234567.89), "R$1.234.567,89")]
    #[case(dec!(1000000), "R$1.000.000")]
    fn test_format_brl(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_brl(value), expected);
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(dec!(-1234.56)), "R$-1.234,56");
        assert_eq!(format_brl(dec!(-500)), "R$-500");
    }

    #[test]
    fn test_format_brl_rounds_to_cents_half_even() {
        assert_eq!(format_brl(dec!(1.005)), "R$1");
        assert_eq!(format_brl(dec!(1.015)), "R$1,02");
    }
}
