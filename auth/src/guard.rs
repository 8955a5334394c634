//! Route access decisions.
//!
//! Every `(state, access)` pair maps to exactly one decision; the guard has no
//! side effects and never fails. Callers turn a redirect decision into an
//! actual navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::context::AuthState;
use crate::role::Role;
use crate::routes::LOGIN_ROUTE;

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Signed-in users whose role is listed.
    Roles(&'static [Role]),
}

/// Outcome of checking a route against the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Nobody is signed in.
    RedirectToLogin,
    /// Signed in, but the role is not allowed here.
    Unauthorized { redirect_to: &'static str },
}

impl GuardDecision {
    /// Path to navigate to instead of rendering, if any.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToLogin => Some(LOGIN_ROUTE),
            Self::Unauthorized { redirect_to } => Some(redirect_to),
        }
    }
}

/// Decide whether a route with `access` may render for `state`.
#[must_use]
pub fn check(state: &AuthState, access: Access) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Render,
        Access::Roles(allowed) => check_roles(state, allowed),
    }
}

/// Decide whether a route restricted to `allowed` may render for `state`.
///
/// Refused users land on their role's home route.
#[must_use]
pub fn check_roles(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    let Some(user) = state.user() else {
        return GuardDecision::RedirectToLogin;
    };
    if allowed.contains(&user.role) {
        GuardDecision::Render
    } else {
        GuardDecision::Unauthorized { redirect_to: user.role.home_route() }
    }
}
