//! Request types for the employee administration API.
//!
//! Employee, position and attendance bodies reuse the form types from
//! [`crate::models`]; this module holds the bodies that exist only at the API
//! boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::Direction;

/// Request body for `POST /login`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Admin email.
    pub email: String,
    /// Admin password.
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Request body for `POST /period/advance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceRequest {
    /// Which way to move.
    pub direction: Direction,
}

/// Request body for `PUT /period/year`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetYearRequest {
    /// The year to jump to.
    pub year: i32,
}

/// Query string of `GET /employees/:id/attendance/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayQuery {
    /// The day to look up, as `YYYY-MM-DD`.
    pub date: NaiveDate,
}
