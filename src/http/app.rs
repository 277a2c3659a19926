use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_employee, admin_login, change_admin_password, dashboard, delete_all_employees, index,
    list_employees, login, logout, record_delivery, record_expense,
};
use super::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        // Employees
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/delivery", post(record_delivery))
        .route("/expense", post(record_expense))
        // Admin
        .route("/admin/login", post(admin_login))
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/employees", get(list_employees).post(add_employee))
        .route("/admin/employees/delete_all", post(delete_all_employees))
        .route("/admin/password", post(change_admin_password))
}

pub fn create_app(state: AppState) -> Router {
    // Any origin may call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
