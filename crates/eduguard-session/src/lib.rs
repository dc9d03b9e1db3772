//! Session lifecycle for the EduGuard dashboard
//!
//! Holds the current session user around the access evaluator: login
//! replaces the record whole and persists it verbatim as JSON under a
//! fixed key, logout clears both, and restore rehydrates the record at
//! startup. The session is either Anonymous or Authenticated; nothing
//! else is tracked.

pub mod error;
pub mod manager;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use manager::{SessionManager, SessionState};
pub use store::{FileSessionRepository, InMemorySessionRepository, SessionRepository};
