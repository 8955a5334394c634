//! Application route table and path resolution.
//!
//! DESIGN
//! ======
//! The table is ordered; the first pattern that matches wins. Patterns are
//! `/`-separated literal segments or `:name` parameters. Access policy lives
//! next to each pattern so the browser router and the CLI share one source of
//! truth for who may open what.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::context::AuthState;
use crate::guard::{self, Access, GuardDecision};
use crate::role::Role;

pub const ROOT_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const STORES_ROUTE: &str = "/stores";
pub const PROFILE_ROUTE: &str = "/profile";
pub const ADMIN_DASHBOARD_ROUTE: &str = "/admin/dashboard";
pub const ADMIN_USERS_ROUTE: &str = "/admin/users";
pub const ADMIN_STORES_ROUTE: &str = "/admin/stores";
pub const OWNER_DASHBOARD_ROUTE: &str = "/owner/dashboard";

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const OWNER_ONLY: &[Role] = &[Role::StoreOwner];

/// Screens the client can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    StoreList,
    StoreDetails,
    Profile,
    AdminDashboard,
    AdminUserList,
    AdminStoreList,
    AdminAddUser,
    AdminAddStore,
    OwnerDashboard,
}

impl Page {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::StoreList => "Stores",
            Self::StoreDetails => "Store Details",
            Self::Profile => "Profile",
            Self::AdminDashboard => "Admin Dashboard",
            Self::AdminUserList => "Users",
            Self::AdminStoreList => "Stores",
            Self::AdminAddUser => "Add User",
            Self::AdminAddStore => "Add Store",
            Self::OwnerDashboard => "Store Owner Dashboard",
        }
    }

    /// Access policy of the route that shows this page.
    #[must_use]
    pub fn access(self) -> Access {
        ROUTES
            .iter()
            .find(|route| route.target == RouteTarget::Page(self))
            .map_or(Access::Public, |route| route.access)
    }
}

/// What a matched route leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Page(Page),
    /// Unconditional redirect to another path.
    Redirect(&'static str),
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub pattern: &'static str,
    pub target: RouteTarget,
    pub access: Access,
}

const fn page(pattern: &'static str, page: Page, access: Access) -> RouteSpec {
    RouteSpec { pattern, target: RouteTarget::Page(page), access }
}

/// Ordered route table of the application.
pub static ROUTES: &[RouteSpec] = &[
    page(LOGIN_ROUTE, Page::Login, Access::Public),
    page(REGISTER_ROUTE, Page::Register, Access::Public),
    page(STORES_ROUTE, Page::StoreList, Access::Public),
    page("/stores/:id", Page::StoreDetails, Access::Public),
    RouteSpec { pattern: ROOT_ROUTE, target: RouteTarget::Redirect(STORES_ROUTE), access: Access::Public },
    page(PROFILE_ROUTE, Page::Profile, Access::Roles(Role::KNOWN)),
    page(ADMIN_DASHBOARD_ROUTE, Page::AdminDashboard, Access::Roles(ADMIN_ONLY)),
    page(ADMIN_USERS_ROUTE, Page::AdminUserList, Access::Roles(ADMIN_ONLY)),
    page(ADMIN_STORES_ROUTE, Page::AdminStoreList, Access::Roles(ADMIN_ONLY)),
    page("/admin/users/new", Page::AdminAddUser, Access::Roles(ADMIN_ONLY)),
    page("/admin/stores/new", Page::AdminAddStore, Access::Roles(ADMIN_ONLY)),
    page(OWNER_DASHBOARD_ROUTE, Page::OwnerDashboard, Access::Roles(OWNER_ONLY)),
];

/// A route matched against a concrete path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteSpec,
    /// Captured `:name` segments in pattern order.
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

/// Result of navigating to a path under the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render { page: Page, params: Vec<(&'static str, String)> },
    Redirect(&'static str),
    NotFound,
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let mut params = Vec::new();
    let mut wanted = segments(pattern);
    let mut given = segments(path);
    loop {
        match (wanted.next(), given.next()) {
            (None, None) => return Some(params),
            (Some(want), Some(got)) => {
                if let Some(name) = want.strip_prefix(':') {
                    params.push((name, got.to_owned()));
                } else if want != got {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Find the first route whose pattern matches `path`.
///
/// Query strings and fragments are ignored; a trailing slash is tolerated.
#[must_use]
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    ROUTES.iter().find_map(|route| {
        match_pattern(route.pattern, path).map(|params| RouteMatch { route, params })
    })
}

/// Resolve `path` and apply the route guard for `state`.
#[must_use]
pub fn navigate(state: &AuthState, path: &str) -> Navigation {
    let Some(matched) = resolve(path) else {
        return Navigation::NotFound;
    };
    match matched.route.target {
        RouteTarget::Redirect(to) => Navigation::Redirect(to),
        RouteTarget::Page(page) => match guard::check(state, matched.route.access) {
            GuardDecision::Render => Navigation::Render { page, params: matched.params },
            decision => {
                let to = decision.redirect_target().unwrap_or(LOGIN_ROUTE);
                tracing::debug!(path, to, "route guard redirected navigation");
                Navigation::Redirect(to)
            }
        },
    }
}
