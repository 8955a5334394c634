//! Login RPC contract and login-form flow.
//!
//! ARCHITECTURE
//! ============
//! Transports live in the frontends (`gloo-net` in the browser, `reqwest` in
//! the CLI). They hand the raw status and body to [`parse_login_reply`] and
//! the outcome to [`LoginForm::finish`], which updates the auth context and
//! picks the next route.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, including a timeout, becomes a display string on the form.
//! Failures never mutate authentication; they clear the context error so only
//! the form's message shows.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};

use crate::context::{AuthContext, AuthState};
use crate::store::SessionStore;
use crate::user::{Session, User};

/// Path of the login endpoint relative to the API base.
pub const LOGIN_ENDPOINT_PATH: &str = "/auth/login";
pub const DEFAULT_LOGIN_TIMEOUT_SECS: u64 = 15;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const LOGIN_TIMEOUT_MESSAGE: &str = "Login request timed out. Please try again.";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Email and password are required.";

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest").field("email", &self.email).finish_non_exhaustive()
    }
}

impl LoginRequest {
    /// Build a request from raw form input.
    ///
    /// # Errors
    ///
    /// Returns a display message when either field is blank.
    pub fn from_form(email: &str, password: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(MISSING_CREDENTIALS_MESSAGE);
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

/// Successful-status body of the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Turn the reply into a session.
    ///
    /// # Errors
    ///
    /// [`LoginError::Unsuccessful`] when the backend reports failure, and
    /// [`LoginError::Decode`] when a success reply lacks a user or token.
    pub fn into_session(self) -> Result<Session, LoginError> {
        if !self.success {
            return Err(LoginError::Unsuccessful { message: self.message });
        }
        match (self.user, self.token) {
            (Some(user), Some(token)) if !token.trim().is_empty() => Ok(Session::new(user, token)),
            _ => Err(LoginError::Decode("login reply missing user or token".to_owned())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Why a login attempt did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Non-2xx status from the backend.
    #[error("login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// 2xx status with `success: false`.
    #[error("login unsuccessful")]
    Unsuccessful { message: Option<String> },
    /// The request never produced a response.
    #[error("login transport failed: {0}")]
    Transport(String),
    /// The response body could not be understood.
    #[error("login response invalid: {0}")]
    Decode(String),
    /// No response within the login timeout.
    #[error("login request timed out")]
    Timeout,
}

impl LoginError {
    /// Message shown to the user: the server's message, else the transport
    /// error text, else a generic fallback.
    #[must_use]
    pub fn display_message(&self) -> String {
        let message = match self {
            Self::Rejected { message, .. } => Some(message.as_str()),
            Self::Unsuccessful { message } => message.as_deref(),
            Self::Transport(message) => Some(message.as_str()),
            Self::Timeout => Some(LOGIN_TIMEOUT_MESSAGE),
            Self::Decode(_) => None,
        };
        message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(LOGIN_FAILED_MESSAGE)
            .to_owned()
    }
}

/// Interpret a raw login reply.
///
/// # Errors
///
/// [`LoginError::Rejected`] for non-2xx statuses, carrying the body's
/// `message` or `request failed: <status>`; [`LoginError::Decode`] for an
/// unreadable 2xx body.
pub fn parse_login_reply(status: u16, body: &str) -> Result<LoginResponse, LoginError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()));
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| rejected_fallback_message(status));
    Err(LoginError::Rejected { status, message })
}

fn rejected_fallback_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Route a signed-in visitor of the login page is sent to.
#[must_use]
pub fn redirect_if_authenticated(state: &AuthState) -> Option<&'static str> {
    state.user().map(|user| user.role.home_route())
}

/// Apply a login outcome to `ctx`.
///
/// On success the session is established and the role's home route is
/// returned. On failure the context error is cleared and the display message
/// is returned.
///
/// # Errors
///
/// Returns the user-visible failure message.
pub fn apply_login_result<S: SessionStore>(
    ctx: &mut AuthContext<S>,
    result: Result<LoginResponse, LoginError>,
) -> Result<&'static str, String> {
    match result.and_then(LoginResponse::into_session) {
        Ok(session) => {
            let home = session.user.role.home_route();
            if let Err(e) = ctx.login(session.user, session.token) {
                tracing::warn!(error = %e, "session not persisted; keeping it in memory");
            }
            Ok(home)
        }
        Err(e) => {
            tracing::info!(error = %e, "login failed");
            ctx.set_error(None);
            Err(e.display_message())
        }
    }
}

/// Login form state: inputs, in-flight flag, and the form-level error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub form_error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a submission.
    ///
    /// Returns the request to send, or `None` when a submission is already in
    /// flight or the input is invalid (the form error then says why).
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.submitting {
            return None;
        }
        self.form_error = None;
        match LoginRequest::from_form(&self.email, &self.password) {
            Ok(request) => {
                self.submitting = true;
                Some(request)
            }
            Err(message) => {
                self.form_error = Some(message.to_owned());
                None
            }
        }
    }

    /// Finish the in-flight submission with the transport's result.
    ///
    /// Returns the route to navigate to on success.
    pub fn finish<S: SessionStore>(
        &mut self,
        ctx: &mut AuthContext<S>,
        result: Result<LoginResponse, LoginError>,
    ) -> Option<&'static str> {
        self.submitting = false;
        match apply_login_result(ctx, result) {
            Ok(home) => {
                self.password.clear();
                Some(home)
            }
            Err(message) => {
                self.form_error = Some(message);
                None
            }
        }
    }

    /// Error to display: the form's own error, else the context error.
    #[must_use]
    pub fn displayed_error<'a>(&'a self, state: &'a AuthState) -> Option<&'a str> {
        self.form_error.as_deref().or(state.error.as_deref())
    }
}
