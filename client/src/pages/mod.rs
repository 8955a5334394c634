//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Every route renders through [`guarded::GuardedPage`], which looks up the
//! page's access policy in the shared route table before showing it.

pub mod frame;
pub mod guarded;
pub mod login;
pub mod profile;
