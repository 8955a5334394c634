use super::*;
use crate::guard::{self, Access, GuardDecision};
use crate::role::Role;
use crate::routes::{ADMIN_ONLY, OWNER_ONLY};
use crate::store::MemorySessionStore;

fn admin_reply() -> LoginResponse {
    parse_login_reply(
        200,
        r#"{"success":true,"token":"t1","user":{"id":1,"name":"Admin","email":"admin@example.com","role":"admin"}}"#,
    )
    .expect("reply")
}

fn filled_form() -> LoginForm {
    LoginForm {
        email: " admin@example.com ".to_owned(),
        password: "secret".to_owned(),
        ..LoginForm::default()
    }
}

// =============================================================================
// LoginRequest
// =============================================================================

#[test]
fn from_form_trims_email_and_keeps_password() {
    assert_eq!(
        LoginRequest::from_form("  a@b.com ", " pw "),
        Ok(LoginRequest { email: "a@b.com".to_owned(), password: " pw ".to_owned() })
    );
}

#[test]
fn from_form_requires_both_fields() {
    assert_eq!(LoginRequest::from_form("   ", "pw"), Err(MISSING_CREDENTIALS_MESSAGE));
    assert_eq!(LoginRequest::from_form("a@b.com", ""), Err(MISSING_CREDENTIALS_MESSAGE));
}

#[test]
fn request_debug_hides_password() {
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    assert!(!format!("{request:?}").contains("hunter2"));
}

#[test]
fn request_serializes_to_wire_shape() {
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw" })
    );
}

// =============================================================================
// parse_login_reply
// =============================================================================

#[test]
fn parse_success_reply() {
    let reply = admin_reply();
    assert!(reply.success);
    assert_eq!(reply.token.as_deref(), Some("t1"));
    assert_eq!(reply.user.map(|u| u.role), Some(Role::Admin));
}

#[test]
fn parse_error_status_uses_server_message() {
    assert_eq!(
        parse_login_reply(401, r#"{"success":false,"message":"Invalid credentials"}"#),
        Err(LoginError::Rejected { status: 401, message: "Invalid credentials".to_owned() })
    );
}

#[test]
fn parse_error_status_without_message_uses_status_fallback() {
    assert_eq!(
        parse_login_reply(502, "<html>bad gateway</html>"),
        Err(LoginError::Rejected { status: 502, message: "request failed: 502".to_owned() })
    );
}

#[test]
fn parse_garbled_success_body_is_decode_error() {
    assert!(matches!(parse_login_reply(200, "{"), Err(LoginError::Decode(_))));
}

// =============================================================================
// LoginError::display_message
// =============================================================================

#[test]
fn display_message_prefers_server_then_transport_then_fallback() {
    assert_eq!(
        LoginError::Rejected { status: 400, message: "Bad input".to_owned() }.display_message(),
        "Bad input"
    );
    assert_eq!(LoginError::Transport("Network Error".to_owned()).display_message(), "Network Error");
    assert_eq!(LoginError::Transport("  ".to_owned()).display_message(), LOGIN_FAILED_MESSAGE);
    assert_eq!(LoginError::Decode("eof".to_owned()).display_message(), LOGIN_FAILED_MESSAGE);
    assert_eq!(LoginError::Unsuccessful { message: None }.display_message(), LOGIN_FAILED_MESSAGE);
    assert_eq!(LoginError::Timeout.display_message(), LOGIN_TIMEOUT_MESSAGE);
}

// =============================================================================
// Login scenarios
// =============================================================================

#[test]
fn admin_login_authenticates_and_guards_follow() {
    let mut ctx = AuthContext::bootstrap(MemorySessionStore::new());
    let mut form = filled_form();

    let request = form.begin_submit().expect("request");
    assert_eq!(request.email, "admin@example.com");
    assert!(form.is_submitting());

    let next = form.finish(&mut ctx, Ok(admin_reply()));
    assert_eq!(next, Some("/admin/dashboard"));
    assert!(!form.is_submitting());
    assert!(form.password.is_empty());

    let state = ctx.state();
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("t1"));
    assert_eq!(guard::check(state, Access::Roles(ADMIN_ONLY)), GuardDecision::Render);
    assert_ne!(guard::check(state, Access::Roles(OWNER_ONLY)), GuardDecision::Render);
}

#[test]
fn rejected_login_shows_server_message_and_stays_logged_out() {
    let store = MemorySessionStore::new();
    let mut ctx = AuthContext::bootstrap(&store);
    ctx.set_error(Some("stale".to_owned()));
    let mut form = filled_form();

    form.begin_submit().expect("request");
    let reply = parse_login_reply(401, r#"{"message":"Invalid credentials"}"#);
    let next = form.finish(&mut ctx, reply);

    assert_eq!(next, None);
    assert!(!ctx.state().is_authenticated());
    assert!(ctx.state().error.is_none());
    assert_eq!(form.displayed_error(ctx.state()), Some("Invalid credentials"));
    assert!(store.raw().is_none());
}

#[test]
fn unsuccessful_reply_is_an_authentication_failure() {
    let mut ctx = AuthContext::bootstrap(MemorySessionStore::new());
    let mut form = filled_form();
    form.begin_submit().expect("request");

    let reply = parse_login_reply(200, r#"{"success":false,"message":"Account locked"}"#);
    assert_eq!(form.finish(&mut ctx, reply), None);
    assert_eq!(form.form_error.as_deref(), Some("Account locked"));
    assert!(!ctx.state().is_authenticated());
}

#[test]
fn success_without_token_is_rejected() {
    let mut ctx = AuthContext::bootstrap(MemorySessionStore::new());
    let reply = parse_login_reply(
        200,
        r#"{"success":true,"user":{"id":1,"name":"n","email":"e@x.io","role":"user"}}"#,
    );
    assert_eq!(apply_login_result(&mut ctx, reply), Err(LOGIN_FAILED_MESSAGE.to_owned()));
    assert!(!ctx.state().is_authenticated());
}

#[test]
fn timeout_reenables_submit_with_timeout_message() {
    let mut ctx = AuthContext::bootstrap(MemorySessionStore::new());
    let mut form = filled_form();
    form.begin_submit().expect("request");

    assert_eq!(form.finish(&mut ctx, Err(LoginError::Timeout)), None);
    assert!(!form.is_submitting());
    assert_eq!(form.form_error.as_deref(), Some(LOGIN_TIMEOUT_MESSAGE));
    assert!(form.begin_submit().is_some());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut form = filled_form();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert!(form.form_error.is_none());
}

#[test]
fn blank_form_reports_missing_credentials() {
    let mut form = LoginForm::default();
    assert!(form.begin_submit().is_none());
    assert!(!form.is_submitting());
    assert_eq!(form.form_error.as_deref(), Some(MISSING_CREDENTIALS_MESSAGE));
}

#[test]
fn displayed_error_falls_back_to_context_error() {
    let mut ctx = AuthContext::bootstrap(MemorySessionStore::new());
    ctx.set_error(Some("Session expired".to_owned()));
    let form = LoginForm::default();
    assert_eq!(form.displayed_error(ctx.state()), Some("Session expired"));
}

#[test]
fn signed_in_visitor_is_redirected_from_login() {
    let mut ctx = AuthContext::bootstrap(MemorySessionStore::new());
    assert_eq!(redirect_if_authenticated(ctx.state()), None);
    apply_login_result(&mut ctx, Ok(admin_reply())).expect("login");
    assert_eq!(redirect_if_authenticated(ctx.state()), Some("/admin/dashboard"));
}
