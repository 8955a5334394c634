//! REST API helpers for communicating with the backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A login call that does not
//! settle within the login timeout resolves to [`LoginError::Timeout`] so the
//! form never stays disabled.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use auth::login::{LoginError, LoginRequest, LoginResponse};

/// Base path of the backend REST API.
pub const API_BASE: &str = "/api";

#[cfg(any(test, feature = "csr"))]
fn login_endpoint() -> String {
    format!("{API_BASE}{}", auth::login::LOGIN_ENDPOINT_PATH)
}

#[cfg(any(test, feature = "csr"))]
fn login_timeout_ms() -> u32 {
    u32::try_from(auth::login::DEFAULT_LOGIN_TIMEOUT_SECS.saturating_mul(1000)).unwrap_or(u32::MAX)
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's rejection, a transport failure, an undecodable
/// reply, or [`LoginError::Timeout`].
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, LoginError> {
    #[cfg(feature = "csr")]
    {
        use futures::future::{Either, select};

        let send = async {
            let resp = gloo_net::http::Request::post(&login_endpoint())
                .json(request)
                .map_err(|e| LoginError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| LoginError::Transport(e.to_string()))?;
            auth::login::parse_login_reply(status, &body)
        };
        let timeout = gloo_timers::future::TimeoutFuture::new(login_timeout_ms());
        futures::pin_mut!(send, timeout);

        match select(send, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                tracing::warn!("login request timed out");
                Err(LoginError::Timeout)
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(LoginError::Transport("not available outside the browser".to_owned()))
    }
}
