//! Browser `localStorage` session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the browser-only read/write glue so the auth context stays
//! independent of `web-sys`. Outside the browser build the store is inert:
//! nothing loads and writes are accepted and dropped.

#[cfg(all(test, not(feature = "csr")))]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use auth::store::{SessionStore, StoreError};
use auth::user::Session;

/// `localStorage` key holding the encoded session record.
pub const SESSION_STORAGE_KEY: &str = "store_rating.session";

/// Session store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_owned()))
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage().ok()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
            auth::store::decode_session(&raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let encoded = auth::store::encode_session(session)?;
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(SESSION_STORAGE_KEY, &encoded)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = encoded;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(SESSION_STORAGE_KEY)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
