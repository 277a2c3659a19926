use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{FIXED_DATE, create_test_app, get, post, send};

#[tokio::test]
async fn index_returns_the_banner() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<h1>Expense Tracker API is Running</h1>");
}

#[tokio::test]
async fn seeded_employee_logs_in_with_any_name_case() {
    let (_dir, app) = create_test_app();

    let (status, body) = post(
        &app,
        "/api/login",
        json!({ "emp_name": "  JOHN doe ", "emp_id": "emp001 " }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "EMP001", "name": "John Doe" }));

    let (_, dashboard) = get(&app, "/api/admin/dashboard").await;
    let logs = dashboard["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["eventType"], "login");
    assert_eq!(logs[0]["employeeName"], "John Doe");
    assert_eq!(logs[0]["employeeId"], "EMP001");
    assert_eq!(logs[0]["timestamp"], "2025-03-14T09:30:00.000000");
}

#[tokio::test]
async fn wrong_credentials_are_rejected_without_logging() {
    let (_dir, app) = create_test_app();

    for body in [
        json!({ "emp_name": "John Doe", "emp_id": "EMP002" }),
        json!({ "emp_name": "Jane Doe", "emp_id": "EMP001" }),
        json!({}),
    ] {
        let (status, resp) = post(&app, "/api/login", body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(resp, json!({ "error": "Invalid credentials" }));
    }

    let (_, dashboard) = get(&app, "/api/admin/dashboard").await;
    assert!(dashboard["logs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn logout_always_appends_one_entry() {
    let (_dir, app) = create_test_app();

    let (status, body) = post(
        &app,
        "/api/logout",
        json!({ "emp_name": "Ghost", "emp_id": "NOPE" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Logout logged" }));

    let (status, _) = post(&app, "/api/logout", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, dashboard) = get(&app, "/api/admin/dashboard").await;
    let logs = dashboard["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l["eventType"] == "logout"));
    assert!(logs.iter().any(|l| l["employeeId"] == "NOPE"));
    assert!(logs.iter().any(|l| l["employeeId"].is_null()));
}

#[tokio::test]
async fn admin_login_checks_the_stored_password() {
    let (_dir, app) = create_test_app();

    let (status, body) = post(&app, "/api/admin/login", json!({ "password": "admin123" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = post(&app, "/api/admin/login", json!({ "password": "admin1234" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Incorrect password" }));

    let (status, _) = post(&app, "/api/admin/login", json!({})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn short_password_change_is_rejected() {
    let (_dir, app) = create_test_app();

    let (status, body) = post(&app, "/api/admin/password", json!({ "new_password": "abcde" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Password must be at least 6 characters." })
    );

    let (status, _) = post(&app, "/api/admin/password", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Old password still works.
    let (status, _) = post(&app, "/api/admin/login", json!({ "password": "admin123" })).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn password_change_takes_effect_immediately() {
    let (_dir, app) = create_test_app();

    let (status, body) = post(&app, "/api/admin/password", json!({ "new_password": "abcdef" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Admin password updated." }));

    let (status, _) = post(&app, "/api/admin/login", json!({ "password": "admin123" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = post(&app, "/api/admin/login", json!({ "password": "abcdef" })).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delivery_and_expense_roll_up_in_the_summary() {
    let (_dir, app) = create_test_app();

    let (status, body) = post(
        &app,
        "/api/delivery",
        json!({ "emp_name": "John Doe", "emp_id": "EMP001", "cust_id": "CUST-1", "gas_price": 10.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Delivery logged." }));

    let (status, body) = post(
        &app,
        "/api/expense",
        json!({ "emp_name": "John Doe", "emp_id": "EMP001", "expense_category": "Fuel", "expense_price": 5.25 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Expense logged." }));

    let (status, dashboard) = get(&app, "/api/admin/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    let key = format!("{FIXED_DATE}|EMP001|John Doe");
    assert_eq!(
        dashboard["summary"],
        json!({ key: { "gas": 10.5, "expense": 5.25 } })
    );

    let delivery = &dashboard["deliveries"][0];
    assert_eq!(delivery["delivery_id"], 1);
    assert_eq!(delivery["date"], FIXED_DATE);
    assert_eq!(delivery["cust_id"], "CUST-1");

    let expense = &dashboard["expenses"][0];
    assert_eq!(expense["expense_id"], 1);
    assert_eq!(expense["expense_category"], "Fuel");
}

#[tokio::test]
async fn malformed_record_bodies_are_server_errors() {
    let (_dir, app) = create_test_app();

    // Missing gas_price.
    let (status, body) = post(
        &app,
        "/api/delivery",
        json!({ "emp_name": "John Doe", "emp_id": "EMP001", "cust_id": "C" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));

    // Wrong type.
    let (status, _) = post(
        &app,
        "/api/expense",
        json!({ "emp_name": "John Doe", "emp_id": "EMP001", "expense_category": "X", "expense_price": "lots" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // No body at all.
    let (status, _) = send(&app, Method::POST, "/api/delivery", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, dashboard) = get(&app, "/api/admin/dashboard").await;
    assert!(dashboard["deliveries"].as_array().unwrap().is_empty());
    assert!(dashboard["expenses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn employees_can_be_added_listed_and_wiped() {
    let (_dir, app) = create_test_app();

    let (status, body) = post(
        &app,
        "/api/admin/employees",
        json!({ "emp_name": "Ada Lovelace", "emp_id": "EMP002" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Employee added." }));

    let (status, list) = get(&app, "/api/admin/employees").await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.contains(&json!({ "id": "EMP002", "name": "Ada Lovelace" })));

    // The new employee can log in.
    let (status, _) = post(
        &app,
        "/api/login",
        json!({ "emp_name": "ada lovelace", "emp_id": "emp002" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_employee_id_is_a_server_error() {
    let (_dir, app) = create_test_app();

    let (status, body) = post(
        &app,
        "/api/admin/employees",
        json!({ "emp_name": "Impostor", "emp_id": "EMP001" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn delete_all_keeps_activity_history() {
    let (_dir, app) = create_test_app();

    post(&app, "/api/login", json!({ "emp_name": "John Doe", "emp_id": "EMP001" })).await;
    post(
        &app,
        "/api/delivery",
        json!({ "emp_name": "John Doe", "emp_id": "EMP001", "cust_id": "C", "gas_price": 1.0 }),
    )
    .await;
    post(
        &app,
        "/api/expense",
        json!({ "emp_name": "John Doe", "emp_id": "EMP001", "expense_category": "Tolls", "expense_price": 2.0 }),
    )
    .await;

    let (status, body) = send(&app, Method::POST, "/api/admin/employees/delete_all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "All employees deleted." }));

    let (_, list) = get(&app, "/api/admin/employees").await;
    assert_eq!(list, json!([]));

    let (_, dashboard) = get(&app, "/api/admin/dashboard").await;
    assert_eq!(dashboard["logs"].as_array().unwrap().len(), 1);
    assert_eq!(dashboard["deliveries"].as_array().unwrap().len(), 1);
    assert_eq!(dashboard["expenses"].as_array().unwrap().len(), 1);

    // Nobody can log in any more.
    let (status, _) = post(&app, "/api/login", json!({ "emp_name": "John Doe", "emp_id": "EMP001" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/employees")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
