//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and the login page must apply identical redirect behavior,
//! so both go through the decisions in `auth::guard` and `auth::login`.

use auth::guard::{self, Access};
use auth::login::redirect_if_authenticated;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::{AuthSignal, use_auth};

/// Render `children` only when the signed-in role satisfies `access`;
/// otherwise redirect to login or to the role's home route.
#[component]
pub fn RequireAccess(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    move || {
        let decision = auth.with(|ctx| guard::check(ctx.state(), access));
        match decision.redirect_target() {
            None => children().into_any(),
            Some(path) => {
                tracing::debug!(to = path, "route guard redirect");
                view! { <Redirect path=path/> }.into_any()
            }
        }
    }
}

/// Send a signed-in visitor to their role's home route.
pub fn install_signed_in_redirect<F>(auth: AuthSignal, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(home) = auth.with(|ctx| redirect_if_authenticated(ctx.state())) {
            navigate(home, NavigateOptions::default());
        }
    });
}
