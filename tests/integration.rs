//! Integration tests for the employee administration API.
//!
//! Each test drives the router end to end against the default configuration
//! and its seeded in-memory store, covering:
//! - Admin sign-in and session guarding
//! - Period navigation and the month grid
//! - Employee and position maintenance, including conflicts
//! - Attendance recording and summaries
//! - Payslip computation

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use employee_admin::api::{AppState, create_router};
use employee_admin::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    create_router(AppState::seeded(config, today).expect("Failed to seed store"))
}

async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn signed_in_router() -> Router {
    let router = create_router_for_test();
    let (status, body) = call(
        &router,
        "POST",
        "/login",
        Some(json!({"email": "admin@example.com", "password": "admin123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    router
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("amount should be a string")).unwrap()
}

fn employee_body(nik: &str, position: &str, base_salary: Value) -> Value {
    json!({
        "nik": nik,
        "name": "Dewi Lestari",
        "department": "Human Resources",
        "position": position,
        "base_salary": base_salary
    })
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_health_is_public() {
    let router = create_router_for_test();
    let (status, body) = call(&router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "Sistem Kepegawaian");
}

#[tokio::test]
async fn test_admin_routes_require_login() {
    let router = create_router_for_test();

    for (method, uri) in [
        ("GET", "/employees"),
        ("GET", "/positions"),
        ("GET", "/period"),
        ("GET", "/calendar"),
        ("GET", "/employees/1/payslip"),
    ] {
        let (status, body) = call(&router, method, uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(body["code"], "NOT_AUTHENTICATED");
    }
}

#[tokio::test]
async fn test_login_returns_identity() {
    let router = create_router_for_test();
    let (status, body) = call(
        &router,
        "POST",
        "/login",
        Some(json!({"email": "admin@example.com", "password": "admin123"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "admin@example.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_login_failure_is_generic() {
    let router = create_router_for_test();

    let (status, wrong_password) = call(
        &router,
        "POST",
        "/login",
        Some(json!({"email": "admin@example.com", "password": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown_email) = call(
        &router,
        "POST",
        "/login",
        Some(json!({"email": "nobody@example.com", "password": "admin123"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["code"], "AUTHENTICATION_FAILED");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let router = signed_in_router().await;

    let (status, _) = call(&router, "POST", "/logout", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&router, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Period navigation
// =============================================================================

#[tokio::test]
async fn test_period_starts_on_current_month() {
    let router = signed_in_router().await;
    let (status, body) = call(&router, "GET", "/period", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2024);
    assert_eq!(body["month"], 0);
    assert_eq!(body["label"], "01–31 Januari 2024");
}

#[tokio::test]
async fn test_advance_crosses_year_boundary() {
    let router = signed_in_router().await;

    let (status, body) = call(
        &router,
        "POST",
        "/period/advance",
        Some(json!({"direction": "previous"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2023);
    assert_eq!(body["month"], 11);
    assert_eq!(body["label"], "01–31 Desember 2023");

    let (_, body) = call(
        &router,
        "POST",
        "/period/advance",
        Some(json!({"direction": "next"})),
    )
    .await;
    assert_eq!(body["year"], 2024);
    assert_eq!(body["month"], 0);
}

#[tokio::test]
async fn test_advance_clamps_at_lower_bound() {
    let router = signed_in_router().await;

    let (status, _) = call(&router, "PUT", "/period/year", Some(json!({"year": 2020}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(
        &router,
        "POST",
        "/period/advance",
        Some(json!({"direction": "previous"})),
    )
    .await;
    assert_eq!(body["year"], 2020);
    assert_eq!(body["month"], 0);
}

#[tokio::test]
async fn test_set_year_out_of_range_is_rejected() {
    let router = signed_in_router().await;

    let (status, body) = call(&router, "PUT", "/period/year", Some(json!({"year": 2036}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, period) = call(&router, "GET", "/period", None).await;
    assert_eq!(period["year"], 2024);
}

#[tokio::test]
async fn test_calendar_leap_february() {
    let router = signed_in_router().await;
    call(
        &router,
        "POST",
        "/period/advance",
        Some(json!({"direction": "next"})),
    )
    .await;

    let (status, body) = call(&router, "GET", "/calendar", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period"]["label"], "01–29 Februari 2024");

    // 1 February 2024 is a Thursday.
    let cells = body["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 3 + 29);
    assert!(cells[..3].iter().all(Value::is_null));
    assert_eq!(cells[3], 1);
    assert_eq!(cells[31], 29);
}

// =============================================================================
// Employees
// =============================================================================

#[tokio::test]
async fn test_list_seeded_employees() {
    let router = signed_in_router().await;
    let (status, body) = call(&router, "GET", "/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    let employees = body.as_array().unwrap();
    assert_eq!(employees.len(), 3);
    assert_eq!(employees[0]["name"], "Budi Santoso");
    assert_eq!(employees[0]["is_active"], true);
}

#[tokio::test]
async fn test_employee_lifecycle() {
    let router = signed_in_router().await;

    let (status, created) = call(
        &router,
        "POST",
        "/employees",
        Some(employee_body("3201010101900004", "Supervisor", json!("5000000"))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(id, 4);

    let (status, updated) = call(
        &router,
        "PUT",
        &format!("/employees/{}", id),
        Some(employee_body("3201010101900004", "Supervisor", json!(5500000))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&updated["base_salary"]), Decimal::from(5_500_000));

    let (_, listed) = call(&router, "GET", "/employees", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 4);

    let (status, _) = call(&router, "DELETE", &format!("/employees/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&router, "GET", &format!("/employees/{}/payslip", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_nik_is_conflict() {
    let router = signed_in_router().await;

    let (status, body) = call(
        &router,
        "POST",
        "/employees",
        Some(employee_body("3201010101900001", "Staff", json!(1000000))),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_NIK");

    let (_, listed) = call(&router, "GET", "/employees", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_invalid_salary_is_rejected_before_store() {
    let router = signed_in_router().await;

    for salary in [
        json!("abc"),
        json!(-5),
        json!("1500.50"),
        json!("1000000000000001"),
        json!("79228162514264337593543950335"),
    ] {
        let (status, body) = call(
            &router,
            "POST",
            "/employees",
            Some(employee_body("3201010101900009", "Staff", salary.clone())),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "salary {}", salary);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let (_, listed) = call(&router, "GET", "/employees", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_employee_fields_are_rejected() {
    let router = signed_in_router().await;
    let (status, body) = call(
        &router,
        "POST",
        "/employees",
        Some(json!({"nik": "3201010101900010"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_unknown_employee_is_not_found() {
    let router = signed_in_router().await;
    let (status, body) = call(
        &router,
        "PUT",
        "/employees/99",
        Some(employee_body("3201010101900099", "Staff", json!(1000000))),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Positions
// =============================================================================

#[tokio::test]
async fn test_delete_referenced_position_is_conflict() {
    let router = signed_in_router().await;

    let (status, body) = call(&router, "DELETE", "/positions/Staff", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "POSITION_IN_USE");

    let (_, positions) = call(&router, "GET", "/positions", None).await;
    assert_eq!(positions.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_position_after_reassignment() {
    let router = signed_in_router().await;

    let (status, _) = call(
        &router,
        "PUT",
        "/employees/1",
        Some(json!({
            "nik": "3201010101900001",
            "name": "Budi Santoso",
            "department": "Operations",
            "position": "Supervisor",
            "base_salary": 3000000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&router, "DELETE", "/positions/Staff", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, positions) = call(&router, "GET", "/positions", None).await;
    let names: Vec<&str> = positions
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"Staff"));
}

#[tokio::test]
async fn test_duplicate_position_is_conflict() {
    let router = signed_in_router().await;
    let (status, body) = call(
        &router,
        "POST",
        "/positions",
        Some(json!({"name": "Manager", "allowance": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_POSITION");
}

#[tokio::test]
async fn test_delete_unknown_position_is_not_found() {
    let router = signed_in_router().await;
    let (status, body) = call(&router, "DELETE", "/positions/Direktur", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "POSITION_NOT_FOUND");
}

// =============================================================================
// Payslips
// =============================================================================

#[tokio::test]
async fn test_payslip_for_staff_member() {
    let router = signed_in_router().await;
    let (status, body) = call(&router, "GET", "/employees/1/payslip", None).await;

    assert_eq!(status, StatusCode::OK);
    let payslip = &body["payslip"];
    assert_eq!(payslip["period_label"], "01–31 Januari 2024");
    assert_eq!(payslip["position"], "Staff");
    assert_eq!(decimal(&payslip["base_salary"]), Decimal::from(3_000_000));
    assert_eq!(decimal(&payslip["allowance"]), Decimal::from(300_000));
    assert_eq!(decimal(&payslip["total_income"]), Decimal::from(3_300_000));
    assert_eq!(decimal(&payslip["total_deduction"]), Decimal::from(450_000));
    assert_eq!(decimal(&payslip["net_pay"]), Decimal::from(2_850_000));
    assert_eq!(body["formatted"]["net_pay"], "Rp 2.850.000,00");
}

#[tokio::test]
async fn test_payslip_for_unmatched_position_has_no_allowance() {
    let router = signed_in_router().await;
    let (status, body) = call(&router, "GET", "/employees/3/payslip", None).await;

    assert_eq!(status, StatusCode::OK);
    let payslip = &body["payslip"];
    assert_eq!(decimal(&payslip["allowance"]), Decimal::ZERO);
    assert_eq!(decimal(&payslip["net_pay"]), Decimal::from(3_550_000));
}

#[tokio::test]
async fn test_payslip_follows_position_allowance_update() {
    let router = signed_in_router().await;

    let (status, _) = call(
        &router,
        "PUT",
        "/positions/Staff",
        Some(json!({"name": "Staff", "allowance": "500000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&router, "GET", "/employees/1/payslip", None).await;
    assert_eq!(decimal(&body["payslip"]["net_pay"]), Decimal::from(3_050_000));
}

#[tokio::test]
async fn test_payslip_label_follows_period() {
    let router = signed_in_router().await;
    call(&router, "PUT", "/period/year", Some(json!({"year": 2025}))).await;

    let (_, body) = call(&router, "GET", "/employees/2/payslip", None).await;
    assert_eq!(body["payslip"]["period_label"], "01–31 Januari 2025");
    assert_eq!(decimal(&body["payslip"]["net_pay"]), Decimal::from(9_050_000));
}

// =============================================================================
// Attendance
// =============================================================================

#[tokio::test]
async fn test_attendance_overwrites_same_day() {
    let router = signed_in_router().await;

    for status in ["sick", "present"] {
        let (code, _) = call(
            &router,
            "POST",
            "/attendance",
            Some(json!({"employee_id": 1, "date": "2024-01-08", "status": status})),
        )
        .await;
        assert_eq!(code, StatusCode::OK);
    }

    let (status, body) = call(&router, "GET", "/employees/1/attendance", None).await;
    assert_eq!(status, StatusCode::OK);
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "present");

    let cell = body["calendar"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["day"] == 8)
        .unwrap();
    assert_eq!(cell["status"], "present");
}

#[tokio::test]
async fn test_attendance_summary_counts_each_status() {
    let router = signed_in_router().await;

    for (date, status) in [
        ("2024-01-02", "present"),
        ("2024-01-03", "sakit"),
        ("2024-01-04", "leave"),
        ("2024-01-05", "absent"),
        ("2024-01-08", "hadir"),
        ("2024-02-01", "absent"),
    ] {
        call(
            &router,
            "POST",
            "/attendance",
            Some(json!({"employee_id": 2, "date": date, "status": status})),
        )
        .await;
    }

    let (status, body) = call(&router, "GET", "/employees/2/attendance/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_present"], 2);
    assert_eq!(body["total_sick"], 1);
    assert_eq!(body["total_leave"], 1);
    assert_eq!(body["total_absent"], 1);
}

#[tokio::test]
async fn test_attendance_without_employee_is_rejected() {
    let router = signed_in_router().await;
    let (status, body) = call(
        &router,
        "POST",
        "/attendance",
        Some(json!({"date": "2024-01-08", "status": "present"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_attendance_without_status_is_rejected() {
    let router = signed_in_router().await;
    let (status, body) = call(
        &router,
        "POST",
        "/attendance",
        Some(json!({"employee_id": 1, "date": "2024-01-09"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, records) = call(&router, "GET", "/employees/1/attendance", None).await;
    let recorded = records["records"]
        .as_array()
        .map_or(0, |records| records.len());
    assert_eq!(recorded, 0);
}

#[tokio::test]
async fn test_attendance_for_unknown_employee_is_not_found() {
    let router = signed_in_router().await;
    let (status, body) = call(
        &router,
        "POST",
        "/attendance",
        Some(json!({"employee_id": 99, "date": "2024-01-09", "status": "present"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_attendance_day_lookup() {
    let router = signed_in_router().await;
    call(
        &router,
        "POST",
        "/attendance",
        Some(json!({"employee_id": 2, "date": "2024-01-10", "status": "sick"})),
    )
    .await;

    let (status, body) = call(
        &router,
        "GET",
        "/employees/2/attendance/day?date=2024-01-10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "sick");

    let (status, body) = call(
        &router,
        "GET",
        "/employees/2/attendance/day?date=2024-01-11",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "present");
    assert_eq!(body["date"], "2024-01-11");

    let (status, body) = call(
        &router,
        "GET",
        "/employees/99/attendance/day?date=2024-01-11",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");

    let (status, body) = call(
        &router,
        "GET",
        "/employees/2/attendance/day?date=2024-13-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_deleting_employee_drops_attendance() {
    let router = signed_in_router().await;
    call(
        &router,
        "POST",
        "/attendance",
        Some(json!({"employee_id": 3, "date": "2024-01-10", "status": "leave"})),
    )
    .await;

    let (status, _) = call(&router, "DELETE", "/employees/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&router, "GET", "/employees/3/attendance", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = signed_in_router().await;
    let request = Request::builder()
        .method("POST")
        .uri("/employees")
        .header("Content-Type", "application/json")
        .body(Body::from("{invalid json"))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unknown_direction_returns_400() {
    let router = signed_in_router().await;
    let (status, body) = call(
        &router,
        "POST",
        "/period/advance",
        Some(json!({"direction": "sideways"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}
