//! Employee check-in/check-out and admin credential handling.
//!
//! The admin password is stored and compared in plaintext. This mirrors
//! the existing deployments' data and is not a security boundary.

use crate::db::TrackerStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EventType, NewLogEntry};
use crate::utils::{Clock, iso_timestamp};
use serde::Deserialize;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const INCORRECT_PASSWORD: &str = "Incorrect password";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Body of `/api/login` and `/api/logout`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeCredentials {
    #[serde(default)]
    pub emp_name: Option<String>,
    #[serde(default)]
    pub emp_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasswordChangeRequest {
    #[serde(default)]
    pub new_password: Option<String>,
}

pub struct AuthLogic;

impl AuthLogic {
    /// Look up the employee and append a `login` entry on success.
    ///
    /// The name is trimmed, the id trimmed and upper-cased before lookup.
    pub fn employee_login(
        store: &dyn TrackerStore,
        clock: &dyn Clock,
        creds: &EmployeeCredentials,
    ) -> AppResult<Employee> {
        let name = creds.emp_name.as_deref().unwrap_or("").trim();
        let id = creds.emp_id.as_deref().unwrap_or("").trim().to_uppercase();

        let Some(employee) = store.find_employee(name, &id)? else {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        store.append_log(&NewLogEntry {
            employee_name: Some(employee.name.clone()),
            employee_id: Some(employee.id.clone()),
            event_type: EventType::Login,
            timestamp: iso_timestamp(&clock.now()),
        })?;

        Ok(employee)
    }

    /// Append a `logout` entry for whatever identity was sent.
    /// Nothing is checked against the employee table.
    pub fn employee_logout(
        store: &dyn TrackerStore,
        clock: &dyn Clock,
        creds: &EmployeeCredentials,
    ) -> AppResult<()> {
        store.append_log(&NewLogEntry {
            employee_name: creds.emp_name.clone(),
            employee_id: creds.emp_id.clone(),
            event_type: EventType::Logout,
            timestamp: iso_timestamp(&clock.now()),
        })
    }

    pub fn admin_login(store: &dyn TrackerStore, req: &AdminLoginRequest) -> AppResult<()> {
        let stored = store.admin_password()?;
        match (stored, req.password.as_deref()) {
            (Some(stored), Some(given)) if stored == given => Ok(()),
            _ => Err(AppError::Unauthorized(INCORRECT_PASSWORD.to_string())),
        }
    }

    /// Overwrite the admin password. No re-authentication is required.
    pub fn change_admin_password(
        store: &dyn TrackerStore,
        req: &PasswordChangeRequest,
    ) -> AppResult<()> {
        let new_password = match req.new_password.as_deref() {
            Some(p) if p.chars().count() >= MIN_PASSWORD_CHARS => p,
            _ => return Err(AppError::Validation(PASSWORD_TOO_SHORT.to_string())),
        };

        store.set_admin_password(new_password)
    }
}
