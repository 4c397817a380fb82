//! Position (jabatan) master records and their allowance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::{AmountInput, lenient_amount};
use super::employee::required;
use crate::error::{AppError, AppResult};

/// A position with the allowance (tunjangan) paid on top of base salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Position name, unique across positions.
    pub name: String,
    /// Monthly allowance in whole currency units.
    ///
    /// Missing or non-numeric values in a record read as zero.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub allowance: Decimal,
}

/// Position data as submitted by the admin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionForm {
    /// Position name.
    #[serde(default)]
    pub name: String,
    /// Monthly allowance.
    #[serde(default)]
    pub allowance: Option<AmountInput>,
}

impl PositionForm {
    /// Validates the form into a position record.
    pub fn validate(self) -> AppResult<Position> {
        let name = required("name", &self.name)?;
        let allowance = self
            .allowance
            .as_ref()
            .ok_or_else(|| AppError::validation("allowance", "is required"))?
            .parse_whole("allowance")?;

        Ok(Position { name, allowance })
    }
}
