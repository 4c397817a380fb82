//! Rupiah display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix shown before every amount.
pub const CURRENCY_PREFIX: &str = "Rp";

/// Formats `amount` the Indonesian way: `Rp` prefix, `.` between thousands,
/// `,` before exactly two decimals.
///
/// # Example
///
/// ```
/// use employee_admin::calculation::format_rupiah;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_rupiah(Decimal::from(2_850_000)), "Rp 2.850.000,00");
/// assert_eq!(format_rupiah(Decimal::from(-450_000)), "-Rp 450.000,00");
/// ```
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{} {},{}", sign, CURRENCY_PREFIX, grouped, fraction)
}
