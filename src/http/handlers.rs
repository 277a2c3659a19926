use axum::{Json, extract::State, response::Html};
use serde::Serialize;
use serde_json::{Value, json};

use crate::core::auth::{AdminLoginRequest, AuthLogic, EmployeeCredentials, PasswordChangeRequest};
use crate::core::dashboard::{Dashboard, DashboardLogic};
use crate::core::employees::{EmployeeLogic, NewEmployeeRequest};
use crate::core::records::RecordLogic;
use crate::errors::AppResult;
use crate::models::{Employee, NewDelivery, NewExpense};

use super::extract::ApiJson;
use super::state::AppState;

pub const INDEX_HTML: &str = "<h1>Expense Tracker API is Running</h1>";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn message(message: &'static str) -> Json<MessageResponse> {
    Json(MessageResponse { message })
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<EmployeeCredentials>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .run(move |store, clock| AuthLogic::employee_login(store, clock, &creds))
        .await?;

    tracing::info!(emp_id = %employee.id, "employee logged in");
    Ok(Json(employee))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<EmployeeCredentials>,
) -> AppResult<Json<MessageResponse>> {
    let emp_id = creds.emp_id.clone().unwrap_or_default();
    state
        .run(move |store, clock| AuthLogic::employee_logout(store, clock, &creds))
        .await?;

    tracing::info!(emp_id = %emp_id, "employee logged out");
    Ok(message("Logout logged"))
}

/// POST /api/admin/login
pub async fn admin_login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AdminLoginRequest>,
) -> AppResult<Json<Value>> {
    state
        .run(move |store, _| AuthLogic::admin_login(store, &req))
        .await?;

    tracing::info!("admin logged in");
    Ok(Json(json!({ "success": true })))
}

/// POST /api/delivery
pub async fn record_delivery(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewDelivery>,
) -> AppResult<Json<MessageResponse>> {
    let delivery = state
        .run(move |store, clock| RecordLogic::record_delivery(store, clock, input))
        .await?;

    tracing::info!(
        emp_id = %delivery.emp_id,
        cust_id = %delivery.cust_id,
        gas_price = delivery.gas_price,
        "delivery recorded"
    );
    Ok(message("Delivery logged."))
}

/// POST /api/expense
pub async fn record_expense(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewExpense>,
) -> AppResult<Json<MessageResponse>> {
    let expense = state
        .run(move |store, clock| RecordLogic::record_expense(store, clock, input))
        .await?;

    tracing::info!(
        emp_id = %expense.emp_id,
        category = %expense.expense_category,
        expense_price = expense.expense_price,
        "expense recorded"
    );
    Ok(message("Expense logged."))
}

/// GET /api/admin/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<Dashboard>> {
    let dashboard = state.run(|store, _| DashboardLogic::load(store)).await?;
    Ok(Json(dashboard))
}

/// GET /api/admin/employees
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.run(|store, _| EmployeeLogic::list(store)).await?;
    Ok(Json(employees))
}

/// POST /api/admin/employees
pub async fn add_employee(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewEmployeeRequest>,
) -> AppResult<Json<MessageResponse>> {
    let employee = state
        .run(move |store, _| EmployeeLogic::add(store, req))
        .await?;

    tracing::info!(emp_id = %employee.id, "employee added");
    Ok(message("Employee added."))
}

/// POST /api/admin/employees/delete_all
pub async fn delete_all_employees(
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    let removed = state
        .run(|store, _| EmployeeLogic::delete_all(store))
        .await?;

    tracing::warn!(removed, "all employees deleted");
    Ok(message("All employees deleted."))
}

/// POST /api/admin/password
pub async fn change_admin_password(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PasswordChangeRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .run(move |store, _| AuthLogic::change_admin_password(store, &req))
        .await?;

    tracing::info!("admin password changed");
    Ok(message("Admin password updated."))
}
