//! Session, role, and access-control core shared by `client` and `cli`.
//!
//! This crate owns the user/session model, the session persistence contract,
//! the auth context, the route guard and route table, navigation derivation,
//! and the login RPC contract. It performs no network I/O and has no browser
//! dependencies; each frontend supplies its own transport and storage medium.

pub mod context;
pub mod guard;
pub mod login;
pub mod nav;
pub mod role;
pub mod routes;
pub mod store;
pub mod user;

pub use context::{AuthContext, AuthState};
pub use guard::{Access, GuardDecision};
pub use role::Role;
pub use store::{SessionStore, StoreError};
pub use user::{Session, User};
