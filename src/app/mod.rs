pub mod event;
pub mod state;

pub use state::AppState;
