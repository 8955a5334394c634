//! Route-level wrapper applying the access policy of a page.

use auth::routes::Page;
use leptos::prelude::*;

use crate::pages::{frame::PageFrame, login::LoginPage, profile::ProfilePage};
use crate::util::auth::RequireAccess;

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
        other => view! { <PageFrame page=other/> }.into_any(),
    }
}

/// Show `page` if the current role may open it.
#[component]
pub fn GuardedPage(page: Page) -> impl IntoView {
    view! { <RequireAccess access=page.access()>{page_view(page)}</RequireAccess> }
}
