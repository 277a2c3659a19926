#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::{Local, TimeZone};
use gastracker::db::{SqliteStore, init_db};
use gastracker::http::{AppState, create_app};
use gastracker::utils::FixedClock;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub fn gst() -> Command {
    cargo_bin_cmd!("gastracker")
}

/// Fresh temp dir plus the path of a (not yet created) database inside it.
pub fn setup_test_db() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tracker.db");
    (dir, path)
}

/// The instant every test app's clock is frozen at.
pub fn fixed_now() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

pub const FIXED_DATE: &str = "14-03-2025";

/// App over a freshly seeded SQLite store with a frozen clock.
pub fn create_test_app() -> (TempDir, Router) {
    let (dir, path) = setup_test_db();
    init_db(&path).expect("init db");

    let state = AppState::new(
        Arc::new(SqliteStore::new(path)),
        Arc::new(FixedClock::new(fixed_now())),
    );
    (dir, create_app(state))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}
