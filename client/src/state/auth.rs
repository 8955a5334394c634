//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root bootstraps one [`AuthContext`] from `localStorage` and
//! provides it as a signal. Route guards, the navbar, and pages read it on
//! every render; login and logout mutate it through `update`.

use auth::AuthContext;
use leptos::prelude::*;

use crate::util::session_storage::BrowserSessionStore;

/// Reactive handle to the app-wide auth context.
pub type AuthSignal = RwSignal<AuthContext<BrowserSessionStore>>;

/// Bootstrap the auth context from browser storage and provide it to
/// descendants.
pub fn provide_auth() -> AuthSignal {
    let auth = RwSignal::new(AuthContext::bootstrap(BrowserSessionStore));
    provide_context(auth);
    auth
}

/// The auth context provided by [`provide_auth`].
///
/// # Panics
///
/// Panics when called outside the app root's component tree.
pub fn use_auth() -> AuthSignal {
    expect_context::<AuthSignal>()
}
