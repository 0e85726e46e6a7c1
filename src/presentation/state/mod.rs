mod app_state;
mod session_store;

pub use app_state::AppState;
pub use session_store::{SessionState, SessionStore, SignedInUser};
