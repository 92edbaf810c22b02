//! Session state: one user's profile, budget, conversation history, and
//! current ranked results, behind a per-session serialization boundary.
//!
//! The [`SessionStore`] guarantees at most one in-flight re-score per session
//! id: concurrent calls on the same session serialize on its lock, so the
//! stored ranking always corresponds to one complete engine invocation.
//! Different sessions never block one another.

mod error;
mod session;
mod store;

pub use error::{Result, SessionError};
pub use session::{ChatTurn, Role, Session, SessionId};
pub use store::SessionStore;
