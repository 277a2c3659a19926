use crate::db::TrackerStore;
use crate::errors::AppResult;
use crate::models::Employee;
use serde::Deserialize;

/// Body of `POST /api/admin/employees`. Both fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployeeRequest {
    pub emp_name: String,
    pub emp_id: String,
}

pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn list(store: &dyn TrackerStore) -> AppResult<Vec<Employee>> {
        store.list_employees()
    }

    /// Insert as given. A duplicate id surfaces as a storage error.
    pub fn add(store: &dyn TrackerStore, req: NewEmployeeRequest) -> AppResult<Employee> {
        let employee = Employee::new(req.emp_id, req.emp_name);
        store.add_employee(&employee)?;
        Ok(employee)
    }

    /// Remove every employee. Logs, deliveries and expenses are kept.
    pub fn delete_all(store: &dyn TrackerStore) -> AppResult<usize> {
        store.delete_all_employees()
    }
}
