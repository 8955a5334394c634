//! Heading-only frame for screens whose content views live outside the auth
//! flow (store listings, store details, admin and owner dashboards).

use auth::routes::Page;
use leptos::prelude::*;

#[component]
pub fn PageFrame(page: Page) -> impl IntoView {
    view! {
        <div class="container">
            <h2>{page.title()}</h2>
        </div>
    }
}
