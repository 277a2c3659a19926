pub mod initialize;
#[cfg(test)]
pub mod memory;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;

pub use initialize::init_db;
pub use pool::DbPool;
pub use store::{SqliteStore, TrackerStore};
