use super::event_type::EventType;
use serde::Serialize;

/// Row of the `logs` table.
///
/// Field names follow the JSON contract of the dashboard, hence the
/// camelCase renames. Name and id are snapshots taken at event time and
/// may be NULL for logouts of unknown employees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub log_id: i64,
    #[serde(rename = "employeeName")]
    pub employee_name: Option<String>,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<String>,
    #[serde(rename = "eventType")]
    pub event_type: EventType,
    pub timestamp: String, // ISO8601, local time
}

/// A log row about to be appended; `log_id` is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub employee_name: Option<String>,
    pub employee_id: Option<String>,
    pub event_type: EventType,
    pub timestamp: String,
}
