//! REST calls to the store rating backend.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use auth::login::{LoginError, LoginRequest, LoginResponse, parse_login_reply};

use crate::config::CliConfig;

fn transport_error(error: reqwest::Error) -> LoginError {
    if error.is_timeout() {
        LoginError::Timeout
    } else {
        LoginError::Transport(error.to_string())
    }
}

/// `POST {base_url}/auth/login`, bounded by the configured login timeout.
///
/// # Errors
///
/// Returns the backend's rejection, a transport failure, an undecodable
/// reply, or [`LoginError::Timeout`].
pub async fn login(config: &CliConfig, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
    let client = reqwest::Client::builder()
        .timeout(config.login_timeout)
        .build()
        .map_err(transport_error)?;

    let response = client
        .post(config.login_url())
        .json(request)
        .send()
        .await
        .map_err(transport_error)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;

    tracing::debug!(status, "login reply received");
    parse_login_reply(status, &body)
}
