//! Session state: who is logged in, and do we know yet.
//!
//! The session is the only shared mutable state in the client. It is written
//! by the bootstrap probe during startup and by the login/signup/logout views
//! afterwards, and read by the route guard on every navigation.

pub mod guard;
pub mod model;
pub mod store;

pub use guard::{GuardDecision, Route, evaluate};
pub use model::{Session, UserIdentity, extract_identity};
pub use store::SessionStore;
