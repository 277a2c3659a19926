mod app;
mod extract;
pub mod handlers;
mod state;

pub use app::create_app;
pub use extract::ApiJson;
pub use state::AppState;
