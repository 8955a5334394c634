//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Auth is the only app-wide state; page-local form state lives in the page
//! that owns it.

pub mod auth;
