//! HTTP API module for employee administration.
//!
//! This module provides the REST endpoints for signing in, navigating the
//! reporting period, maintaining employees and positions, recording
//! attendance, and producing payslips.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AdvanceRequest, DayQuery, LoginRequest, SetYearRequest};
pub use response::{ApiError, ApiErrorResponse, FormattedPayslip, PayslipResponse};
pub use state::AppState;
