use super::*;
use crate::user::{Session, User};

fn state_with(role: Option<Role>) -> AuthState {
    AuthState {
        session: role.map(|role| {
            Session::new(
                User {
                    id: "9".to_owned(),
                    name: "n".to_owned(),
                    email: "e@example.com".to_owned(),
                    role,
                    address: None,
                },
                "t",
            )
        }),
        error: None,
    }
}

fn rendered(nav: &Navigation) -> Option<Page> {
    match nav {
        Navigation::Render { page, .. } => Some(*page),
        _ => None,
    }
}

// =============================================================================
// resolve
// =============================================================================

#[test]
fn resolve_literal_routes() {
    assert_eq!(resolve("/login").map(|m| m.route.target), Some(RouteTarget::Page(Page::Login)));
    assert_eq!(
        resolve("/admin/users/new").map(|m| m.route.target),
        Some(RouteTarget::Page(Page::AdminAddUser))
    );
}

#[test]
fn resolve_captures_params() {
    let matched = resolve("/stores/42").expect("match");
    assert_eq!(matched.route.target, RouteTarget::Page(Page::StoreDetails));
    assert_eq!(matched.param("id"), Some("42"));
    assert_eq!(matched.param("missing"), None);
}

#[test]
fn resolve_tolerates_trailing_slash_and_query() {
    assert_eq!(
        resolve("/stores/").map(|m| m.route.target),
        Some(RouteTarget::Page(Page::StoreList))
    );
    assert_eq!(
        resolve("/stores/5?tab=ratings#top").and_then(|m| m.param("id").map(ToOwned::to_owned)),
        Some("5".to_owned())
    );
}

#[test]
fn resolve_root_is_redirect() {
    assert_eq!(resolve("/").map(|m| m.route.target), Some(RouteTarget::Redirect("/stores")));
}

#[test]
fn resolve_unknown_path_is_none() {
    assert!(resolve("/nope").is_none());
    assert!(resolve("/stores/1/extra").is_none());
}

#[test]
fn page_access_matches_table() {
    assert_eq!(Page::AdminAddStore.access(), Access::Roles(ADMIN_ONLY));
    assert_eq!(Page::OwnerDashboard.access(), Access::Roles(OWNER_ONLY));
    assert_eq!(Page::StoreDetails.access(), Access::Public);
    assert_eq!(Page::Profile.access(), Access::Roles(Role::KNOWN));
}

// =============================================================================
// navigate
// =============================================================================

#[test]
fn admin_can_open_admin_routes_but_not_owner_routes() {
    let state = state_with(Some(Role::Admin));
    assert_eq!(rendered(&navigate(&state, "/admin/dashboard")), Some(Page::AdminDashboard));
    assert_eq!(navigate(&state, "/owner/dashboard"), Navigation::Redirect("/admin/dashboard"));
}

#[test]
fn logged_out_user_is_sent_to_login_for_protected_routes() {
    let state = state_with(None);
    for path in ["/profile", "/admin/users", "/owner/dashboard"] {
        assert_eq!(navigate(&state, path), Navigation::Redirect("/login"));
    }
}

#[test]
fn public_routes_render_when_logged_out() {
    let state = state_with(None);
    assert_eq!(rendered(&navigate(&state, "/stores")), Some(Page::StoreList));
    assert_eq!(
        navigate(&state, "/stores/3"),
        Navigation::Render { page: Page::StoreDetails, params: vec![("id", "3".to_owned())] }
    );
}

#[test]
fn profile_is_open_to_every_known_role() {
    for role in [Role::User, Role::Admin, Role::StoreOwner] {
        assert_eq!(rendered(&navigate(&state_with(Some(role)), "/profile")), Some(Page::Profile));
    }
}

#[test]
fn root_redirects_to_store_list() {
    assert_eq!(navigate(&state_with(None), "/"), Navigation::Redirect("/stores"));
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(navigate(&state_with(Some(Role::Admin)), "/admin/secret"), Navigation::NotFound);
}
