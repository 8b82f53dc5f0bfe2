//! Feature views.
//!
//! Each view catches every error at its own boundary and renders a
//! user-facing message; nothing propagates past a view. The bool return
//! feeds the process exit code.

pub mod add_log;
pub mod dashboard;
pub mod login;
pub mod logout;
pub mod reminder;
pub mod report;
pub mod signup;
