//! Response types for the employee administration API.
//!
//! This module defines the error response structures, the mapping from
//! [`AppError`] to HTTP status codes, and response bodies that add display
//! formatting to domain values.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::format_rupiah;
use crate::error::AppError;
use crate::models::Payslip;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs a status with an error body.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AppError> for ApiErrorResponse {
    fn from(error: AppError) -> Self {
        match error {
            AppError::ConfigNotFound { .. }
            | AppError::ConfigParseError { .. }
            | AppError::ConfigInvalid { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string()),
            ),
            AppError::Validation { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(error.to_string()),
            ),
            AppError::InvalidPeriod { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PERIOD", error.to_string()),
            ),
            AppError::EmployeeNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", error.to_string()),
            ),
            AppError::PositionNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("POSITION_NOT_FOUND", error.to_string()),
            ),
            AppError::DuplicateNik { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new("DUPLICATE_NIK", error.to_string()),
            ),
            AppError::DuplicatePosition { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new("DUPLICATE_POSITION", error.to_string()),
            ),
            AppError::PositionInUse { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "POSITION_IN_USE",
                    error.to_string(),
                    "Move the employees holding this position to another one before deleting it",
                ),
            ),
            AppError::AuthenticationFailed => ApiErrorResponse::new(
                StatusCode::UNAUTHORIZED,
                ApiError::new("AUTHENTICATION_FAILED", "Login failed"),
            ),
            AppError::NotAuthenticated => ApiErrorResponse::new(
                StatusCode::UNAUTHORIZED,
                ApiError::new("NOT_AUTHENTICATED", error.to_string()),
            ),
            // Store and I/O detail goes to the log, not to the client.
            AppError::Store { .. } | AppError::Io(_) => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("STORE_ERROR", "The request could not be completed"),
            ),
        }
    }
}

/// Payslip amounts rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedPayslip {
    /// Base salary.
    pub base_salary: String,
    /// Position allowance.
    pub allowance: String,
    /// Health-insurance deduction.
    pub health_insurance: String,
    /// Total income.
    pub total_income: String,
    /// Total deduction.
    pub total_deduction: String,
    /// Net pay.
    pub net_pay: String,
}

/// Response body for a payslip request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipResponse {
    /// The payslip with raw decimal amounts.
    pub payslip: Payslip,
    /// The same amounts formatted in rupiah.
    pub formatted: FormattedPayslip,
}

impl From<Payslip> for PayslipResponse {
    fn from(payslip: Payslip) -> Self {
        let formatted = FormattedPayslip {
            base_salary: format_rupiah(payslip.base_salary),
            allowance: format_rupiah(payslip.allowance),
            health_insurance: format_rupiah(payslip.health_insurance),
            total_income: format_rupiah(payslip.total_income),
            total_deduction: format_rupiah(payslip.total_deduction),
            net_pay: format_rupiah(payslip.net_pay),
        };
        Self { payslip, formatted }
    }
}
