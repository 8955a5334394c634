//! Auth-session state for the current client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the application root (a reactive signal in the browser client, a
//! local value in the CLI) and read by route guards and navigation. It is a
//! passive holder: it never talks to the network, and login failures are
//! reported into it by the caller.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use crate::store::{SessionStore, StoreError};
use crate::user::{Session, User};

/// Snapshot of who is signed in plus the current user-visible error.
///
/// Authentication is derived from `session`, so a user is present exactly
/// when the state is authenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub error: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }
}

/// Auth state bound to the store that persists it.
#[derive(Debug)]
pub struct AuthContext<S> {
    store: S,
    state: AuthState,
}

impl<S: SessionStore> AuthContext<S> {
    /// Build the context from whatever session `store` holds.
    pub fn bootstrap(store: S) -> Self {
        let session = store.load();
        if let Some(session) = &session {
            tracing::debug!(user_id = %session.user.id, role = %session.user.role, "restored persisted session");
            if !session.user.role.is_known() {
                tracing::warn!(role = %session.user.role, "persisted session has an unrecognized role");
            }
        }
        Self { store, state: AuthState { session, error: None } }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mark `user` as signed in with `token` and persist the session.
    ///
    /// The in-memory session is set even when persisting fails, so the user
    /// stays signed in for the rest of this run.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the session could not be saved.
    pub fn login(&mut self, user: User, token: impl Into<String>) -> Result<(), StoreError> {
        let session = Session::new(user, token);
        let saved = self.store.save(&session);
        tracing::info!(
            user_id = %session.user.id,
            role = %session.user.role,
            persisted = saved.is_ok(),
            "session established"
        );
        self.state.session = Some(session);
        saved
    }

    /// Sign out and remove the persisted session, whatever the prior state.
    pub fn logout(&mut self) {
        if let Some(session) = self.state.session.take() {
            tracing::info!(user_id = %session.user.id, "session ended");
        }
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }
    }

    /// Set or clear the user-visible error. Authentication is untouched.
    pub fn set_error(&mut self, error: Option<String>) {
        self.state.error = error;
    }
}
