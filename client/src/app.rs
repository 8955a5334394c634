//! Root application component with routing and context providers.

use auth::routes::{Page, STORES_ROUTE};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::guarded::GuardedPage;
use crate::state::auth::provide_auth;

/// Root application component.
///
/// Bootstraps the auth context from browser storage, provides it to every
/// descendant, and sets up client-side routing. Each route's access policy
/// comes from the shared route table via `GuardedPage`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Title text="Store Rating"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=|| view! { <GuardedPage page=Page::Login/> }/>
                <Route path=StaticSegment("register") view=|| view! { <GuardedPage page=Page::Register/> }/>
                <Route path=StaticSegment("stores") view=|| view! { <GuardedPage page=Page::StoreList/> }/>
                <Route
                    path=(StaticSegment("stores"), ParamSegment("id"))
                    view=|| view! { <GuardedPage page=Page::StoreDetails/> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=STORES_ROUTE/> }/>

                <Route path=StaticSegment("profile") view=|| view! { <GuardedPage page=Page::Profile/> }/>

                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! { <GuardedPage page=Page::AdminDashboard/> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| view! { <GuardedPage page=Page::AdminUserList/> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("stores"))
                    view=|| view! { <GuardedPage page=Page::AdminStoreList/> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"), StaticSegment("new"))
                    view=|| view! { <GuardedPage page=Page::AdminAddUser/> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("stores"), StaticSegment("new"))
                    view=|| view! { <GuardedPage page=Page::AdminAddStore/> }
                />

                <Route
                    path=(StaticSegment("owner"), StaticSegment("dashboard"))
                    view=|| view! { <GuardedPage page=Page::OwnerDashboard/> }
                />
            </Routes>
        </Router>
    }
}
