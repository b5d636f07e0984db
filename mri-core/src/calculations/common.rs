//! Common numeric helpers.
//!
//! Rounding and formatting are presentation concerns: the estimator never
//! rounds, and callers apply [`format_currency`] only when printing.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mri_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the arithmetic mean of a slice of decimal values.
///
/// # Arguments
///
/// * `values` - The values to average
///
/// # Returns
///
/// The mean, or `None` when `values` is empty or their sum overflows
/// [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mri_core::calculations::common::mean;
///
/// assert_eq!(mean(&[dec!(30), dec!(45)]), Some(dec!(37.5)));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let total = values
        .iter()
        .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(*value))?;
    total.checked_div(Decimal::from(values.len()))
}

/// Formats a dollar amount for display.
///
/// The value is rounded with [`round_half_up`], the integer part is grouped
/// with `,` every three digits, and a `$` is prepended.
///
/// # Arguments
///
/// * `value` - The unrounded dollar amount
///
/// # Returns
///
/// The amount as `$1,234.56`, or `-$1,234.56` for negative values. Values
/// that round to zero are never shown with a sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mri_core::format_currency;
///
/// assert_eq!(format_currency(dec!(281.25)), "$281.25");
/// assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_handles_large_values() {
        assert_eq!(round_half_up(dec!(999999.999)), dec!(1000000.00));
    }

    // =========================================================================
    // mean tests
    // =========================================================================

    #[test]
    fn mean_of_single_value_is_that_value() {
        assert_eq!(mean(&[dec!(42.5)]), Some(dec!(42.5)));
    }

    #[test]
    fn mean_of_several_values() {
        assert_eq!(mean(&[dec!(30), dec!(45), dec!(60)]), Some(dec!(45)));
    }

    #[test]
    fn mean_of_empty_slice_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn mean_returns_none_when_sum_overflows() {
        assert_eq!(mean(&[Decimal::MAX, Decimal::MAX]), None);
    }

    #[test]
    fn mean_of_max_alone_does_not_overflow() {
        assert_eq!(mean(&[Decimal::MAX]), Some(Decimal::MAX));
    }

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_pads_to_two_decimals() {
        assert_eq!(format_currency(dec!(250)), "$250.00");
        assert_eq!(format_currency(dec!(250.5)), "$250.50");
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(12345.678)), "$12,345.68");
        assert_eq!(format_currency(dec!(100000)), "$100,000.00");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn format_currency_below_one_thousand_has_no_separator() {
        assert_eq!(format_currency(dec!(999.994)), "$999.99");
    }

    #[test]
    fn format_currency_rounding_can_carry_into_new_group() {
        assert_eq!(format_currency(dec!(999.995)), "$1,000.00");
    }

    #[test]
    fn format_currency_handles_zero_and_negative() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
        assert_eq!(format_currency(dec!(-1500.5)), "-$1,500.50");
    }
}
