//! Navigation links derived from the signed-in role.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::context::{AuthContext, AuthState};
use crate::role::Role;
use crate::routes::{
    ADMIN_DASHBOARD_ROUTE, ADMIN_STORES_ROUTE, ADMIN_USERS_ROUTE, LOGIN_ROUTE, OWNER_DASHBOARD_ROUTE, PROFILE_ROUTE,
    REGISTER_ROUTE, STORES_ROUTE,
};
use crate::store::SessionStore;

/// A labelled link to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// One navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavEntry {
    Link(NavLink),
    /// Sign out, then go to the login route. See [`logout`].
    Logout,
}

impl NavEntry {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Link(link) => link.label,
            Self::Logout => "Logout",
        }
    }
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

const GUEST_LINKS: &[NavLink] = &[link("Login", LOGIN_ROUTE), link("Register", REGISTER_ROUTE)];
const ADMIN_LINKS: &[NavLink] = &[
    link("Dashboard", ADMIN_DASHBOARD_ROUTE),
    link("Stores", ADMIN_STORES_ROUTE),
    link("Users", ADMIN_USERS_ROUTE),
];
const USER_LINKS: &[NavLink] = &[link("Stores", STORES_ROUTE)];
const OWNER_LINKS: &[NavLink] = &[link("Dashboard", OWNER_DASHBOARD_ROUTE)];
const PROFILE_LINK: NavLink = link("Profile", PROFILE_ROUTE);

fn role_links(role: &Role) -> &'static [NavLink] {
    match role {
        Role::Admin => ADMIN_LINKS,
        Role::User => USER_LINKS,
        Role::StoreOwner => OWNER_LINKS,
        Role::Unknown(_) => &[],
    }
}

/// Navbar entries for `state`, in display order.
#[must_use]
pub fn render(state: &AuthState) -> Vec<NavEntry> {
    let Some(user) = state.user() else {
        return GUEST_LINKS.iter().copied().map(NavEntry::Link).collect();
    };
    role_links(&user.role)
        .iter()
        .copied()
        .map(NavEntry::Link)
        .chain([NavEntry::Link(PROFILE_LINK), NavEntry::Logout])
        .collect()
}

/// Sign out and return the route to navigate to next.
///
/// State is cleared before the caller navigates, so the destination already
/// renders as signed out.
pub fn logout<S: SessionStore>(ctx: &mut AuthContext<S>) -> &'static str {
    ctx.logout();
    LOGIN_ROUTE
}
