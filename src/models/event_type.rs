use serde::{Deserialize, Serialize};

/// Kind of a row in the `logs` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Login,
    Logout,
}

impl EventType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::Login => "login",
            EventType::Logout => "logout",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "login" => Some(EventType::Login),
            "logout" => Some(EventType::Logout),
            _ => None,
        }
    }
}
