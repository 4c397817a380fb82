//! HTTP request handlers for the employee administration API.
//!
//! Every handler tags its work with a fresh correlation ID, locks the admin
//! session for the duration of the action, and maps [`AppError`] into an
//! [`ApiErrorResponse`].

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{AttendanceEntry, Employee, EmployeeForm, Position, PositionForm};

use super::request::{AdvanceRequest, DayQuery, LoginRequest, SetYearRequest};
use super::response::{ApiError, ApiErrorResponse, PayslipResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/period", get(period_handler))
        .route("/period/advance", post(advance_handler))
        .route("/period/year", put(set_year_handler))
        .route("/calendar", get(calendar_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(add_employee_handler),
        )
        .route(
            "/employees/:id",
            put(update_employee_handler).delete(delete_employee_handler),
        )
        .route("/employees/:id/payslip", get(payslip_handler))
        .route("/employees/:id/attendance", get(attendance_handler))
        .route("/employees/:id/attendance/day", get(attendance_day_handler))
        .route(
            "/employees/:id/attendance/summary",
            get(attendance_summary_handler),
        )
        .route(
            "/positions",
            get(list_positions_handler).post(add_position_handler),
        )
        .route(
            "/positions/:name",
            put(update_position_handler).delete(delete_position_handler),
        )
        .route("/attendance", post(record_attendance_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body or builds the 400 response for it.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(json_response(StatusCode::BAD_REQUEST, error))
}

fn error_response(correlation_id: Uuid, action: &'static str, err: AppError) -> Response {
    match &err {
        AppError::Store { .. } | AppError::Io(_) => error!(
            correlation_id = %correlation_id,
            action = action,
            error = %err,
            "Request failed"
        ),
        _ => warn!(
            correlation_id = %correlation_id,
            action = action,
            error = %err,
            "Request rejected"
        ),
    }
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Turns an action's outcome into a response with `status` on success.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    action: &'static str,
    status: StatusCode,
    outcome: AppResult<T>,
) -> Response {
    match outcome {
        Ok(body) => {
            info!(correlation_id = %correlation_id, action = action, "Request completed");
            json_response(status, body)
        }
        Err(err) => error_response(correlation_id, action, err),
    }
}

fn respond_empty(correlation_id: Uuid, action: &'static str, outcome: AppResult<()>) -> Response {
    match outcome {
        Ok(()) => {
            info!(correlation_id = %correlation_id, action = action, "Request completed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => error_response(correlation_id, action, err),
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    name: &'a str,
}

async fn health_handler(State(state): State<AppState>) -> Response {
    let body = HealthResponse {
        status: "ok",
        name: &state.config().config().metadata().name,
    };
    json_response(StatusCode::OK, body)
}

/// Handler for POST /login.
///
/// A failed login leaves the session signed out and answers with a generic
/// message.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    info!(correlation_id = %correlation_id, email = %request.email, "Processing login");

    let mut session = state.session().lock().await;
    let outcome = session.login(&request.email, &request.password);
    respond(correlation_id, "login", StatusCode::OK, outcome)
}

async fn logout_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    state.session().lock().await.logout();
    respond_empty(correlation_id, "logout", Ok(()))
}

async fn period_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let outcome = state.session().lock().await.period();
    respond(correlation_id, "period", StatusCode::OK, outcome)
}

async fn advance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdvanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let outcome = state.session().lock().await.advance(request.direction);
    respond(correlation_id, "advance_period", StatusCode::OK, outcome)
}

async fn set_year_handler(
    State(state): State<AppState>,
    payload: Result<Json<SetYearRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let outcome = state.session().lock().await.set_year(request.year);
    respond(correlation_id, "set_year", StatusCode::OK, outcome)
}

async fn calendar_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let outcome = state.session().lock().await.calendar();
    respond(correlation_id, "calendar", StatusCode::OK, outcome)
}

async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = state.session().lock().await;
    let outcome = session.employees().map(<[Employee]>::to_vec);
    respond(correlation_id, "list_employees", StatusCode::OK, outcome)
}

async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let form = match parse_body(correlation_id, payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let outcome = state.session().lock().await.add_employee(form);
    if let Ok(employee) = &outcome {
        info!(correlation_id = %correlation_id, employee_id = employee.id, "Employee added");
    }
    respond(correlation_id, "add_employee", StatusCode::CREATED, outcome)
}

async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<EmployeeForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let form = match parse_body(correlation_id, payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let outcome = state.session().lock().await.update_employee(id, form);
    respond(correlation_id, "update_employee", StatusCode::OK, outcome)
}

async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Deleting employee");
    let outcome = state.session().lock().await.delete_employee(id);
    respond_empty(correlation_id, "delete_employee", outcome)
}

/// Handler for GET /employees/:id/payslip.
///
/// Computes the payslip for the selected period from the session's cached
/// employee and position lists.
async fn payslip_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    let outcome = state
        .session()
        .lock()
        .await
        .payslip(id)
        .map(PayslipResponse::from);
    if let Ok(response) = &outcome {
        info!(
            correlation_id = %correlation_id,
            employee_id = id,
            net_pay = %response.payslip.net_pay,
            "Payslip computed"
        );
    }
    respond(correlation_id, "payslip", StatusCode::OK, outcome)
}

async fn attendance_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    let outcome = state.session().lock().await.attendance(id);
    respond(correlation_id, "attendance", StatusCode::OK, outcome)
}

/// Handler for GET /employees/:id/attendance/day?date=YYYY-MM-DD.
///
/// Answers with the recorded status, or present when the day has no record.
async fn attendance_day_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let date = match query {
        Ok(Query(query)) => query.date,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string error"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    let outcome = state.session().lock().await.attendance_on(id, date);
    respond(correlation_id, "attendance_day", StatusCode::OK, outcome)
}

async fn attendance_summary_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let outcome = state.session().lock().await.attendance_summary(id);
    respond(correlation_id, "attendance_summary", StatusCode::OK, outcome)
}

async fn list_positions_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = state.session().lock().await;
    let outcome = session.positions().map(<[Position]>::to_vec);
    respond(correlation_id, "list_positions", StatusCode::OK, outcome)
}

async fn add_position_handler(
    State(state): State<AppState>,
    payload: Result<Json<PositionForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let form = match parse_body(correlation_id, payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let outcome = state.session().lock().await.add_position(form);
    respond(correlation_id, "add_position", StatusCode::CREATED, outcome)
}

async fn update_position_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<PositionForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let form = match parse_body(correlation_id, payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let outcome = state.session().lock().await.update_position(&name, form);
    respond(correlation_id, "update_position", StatusCode::OK, outcome)
}

async fn delete_position_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, position = %name, "Deleting position");
    let outcome = state.session().lock().await.delete_position(&name);
    respond_empty(correlation_id, "delete_position", outcome)
}

async fn record_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceEntry>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entry = match parse_body(correlation_id, payload) {
        Ok(entry) => entry,
        Err(response) => return response,
    };

    let outcome = state.session().lock().await.record_attendance(entry);
    respond(correlation_id, "record_attendance", StatusCode::OK, outcome)
}
