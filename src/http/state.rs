use std::sync::Arc;

use crate::db::TrackerStore;
use crate::errors::{AppError, AppResult};
use crate::utils::Clock;

/// Shared handler context: the storage handle and the clock.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TrackerStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn TrackerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Run a storage operation on the blocking pool.
    pub async fn run<F, T>(&self, op: F) -> AppResult<T>
    where
        F: FnOnce(&dyn TrackerStore, &dyn Clock) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let clock = Arc::clone(&self.clock);

        tokio::task::spawn_blocking(move || op(store.as_ref(), clock.as_ref()))
            .await
            .map_err(|e| AppError::Internal(format!("storage task failed: {e}")))?
    }
}
