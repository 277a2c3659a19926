pub mod delivery;
pub mod employee;
pub mod event_type;
pub mod expense;
pub mod log_entry;

pub use delivery::{Delivery, NewDelivery};
pub use employee::Employee;
pub use event_type::EventType;
pub use expense::{Expense, NewExpense};
pub use log_entry::{LogEntry, NewLogEntry};
