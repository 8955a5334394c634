//! Top navigation bar with role-dependent links.

use auth::nav::{self, NavEntry};
use auth::routes::ROOT_ROUTE;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;

/// Navbar. Links are re-derived from the auth context on every change.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    // Sign out first, then navigate, so the login page renders signed out.
    let on_logout = move || {
        let next = auth.try_update(nav::logout);
        if let Some(path) = next {
            navigate(path, NavigateOptions::default());
        }
    };

    view! {
        <nav class="navbar">
            <div class="container">
                <h1 class="navbar-brand">
                    <A href=ROOT_ROUTE>"Store Rating"</A>
                </h1>
                <ul class="navbar-nav">
                    {move || {
                        auth.with(|ctx| nav::render(ctx.state()))
                            .into_iter()
                            .map(|entry| match entry {
                                NavEntry::Link(link) => {
                                    view! {
                                        <li>
                                            <A href=link.href>{link.label}</A>
                                        </li>
                                    }
                                        .into_any()
                                }
                                NavEntry::Logout => {
                                    let on_logout = on_logout.clone();
                                    view! {
                                        <li>
                                            <button class="btn btn-sm" on:click=move |_| on_logout()>
                                                {entry.label()}
                                            </button>
                                        </li>
                                    }
                                        .into_any()
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </nav>
    }
}
