//! Session state management
//!
//! - SessionState: one browser's learning style and quiz toggle
//! - SessionStore: the in-memory map of live sessions

pub mod session;
pub mod store;

pub use session::SessionState;
pub use store::{SessionId, SessionStore};
