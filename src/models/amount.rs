//! Money amounts as they arrive from forms and store records.
//!
//! Forms are strict: a blank, non-numeric, negative, fractional, or oversized
//! amount is a validation error. Store records are lenient: anything that is
//! not a number in range reads as zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Largest accepted amount, 10^15. Sums of a few such amounts stay far
/// inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// An amount typed into a form, either as a JSON number or as text.
///
/// # Example
///
/// ```
/// use employee_admin::models::AmountInput;
/// use rust_decimal::Decimal;
///
/// let input = AmountInput::Text(" 3000000 ".to_string());
/// assert_eq!(input.parse_whole("base_salary").unwrap(), Decimal::from(3_000_000));
///
/// let bad = AmountInput::Text("tiga juta".to_string());
/// assert!(bad.parse_whole("base_salary").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number.
    Number(serde_json::Number),
    /// A string, as sent by text inputs.
    Text(String),
}

impl AmountInput {
    /// Parses the input as a non-negative whole currency amount no larger
    /// than [`MAX_AMOUNT`].
    ///
    /// `field` names the form field in the returned validation error.
    pub fn parse_whole(&self, field: &str) -> AppResult<Decimal> {
        let raw = match self {
            AmountInput::Number(n) => n.to_string(),
            AmountInput::Text(s) => s.trim().to_string(),
        };

        if raw.is_empty() {
            return Err(AppError::validation(field, "is required"));
        }

        let amount = parse_decimal(&raw).ok_or_else(|| AppError::validation(field, "must be a number"))?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(AppError::validation(field, "must not be negative"));
        }
        if !amount.fract().is_zero() {
            return Err(AppError::validation(field, "must be a whole number"));
        }
        if amount > MAX_AMOUNT {
            return Err(AppError::validation(
                field,
                format!("must not exceed {}", MAX_AMOUNT),
            ));
        }

        Ok(amount.normalize())
    }
}

/// Parses plain or scientific decimal notation.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
}

/// Coerces an untyped store value into an amount.
///
/// Numbers and numeric strings keep their value; `null`, booleans,
/// non-numeric strings, arrays, objects and magnitudes above [`MAX_AMOUNT`]
/// all become zero.
///
/// # Example
///
/// ```
/// use employee_admin::models::coerce_amount;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// assert_eq!(coerce_amount(&json!(300000)), Decimal::from(300_000));
/// assert_eq!(coerce_amount(&json!("300000")), Decimal::from(300_000));
/// assert_eq!(coerce_amount(&json!("n/a")), Decimal::ZERO);
/// assert_eq!(coerce_amount(&json!(null)), Decimal::ZERO);
/// ```
pub fn coerce_amount(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
    .filter(|amount| amount.abs() <= MAX_AMOUNT)
    .unwrap_or(Decimal::ZERO)
}

/// Serde adapter applying [`coerce_amount`] to a record field.
///
/// Pair with `#[serde(default)]` so a missing field also reads as zero.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_amount).unwrap_or(Decimal::ZERO))
}
