//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls; wire types are shared with the CLI through the
//! `auth` crate.

pub mod api;
