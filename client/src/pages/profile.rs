//! Profile page showing the signed-in user.

use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    move || {
        auth.with(|ctx| ctx.state().user().cloned()).map(|user| {
            view! {
                <div class="container">
                    <div class="card">
                        <h2>"Profile"</h2>
                        <p>
                            <strong>"Name: "</strong>
                            {user.name}
                        </p>
                        <p>
                            <strong>"Email: "</strong>
                            {user.email}
                        </p>
                        <p>
                            <strong>"Role: "</strong>
                            {user.role.to_string()}
                        </p>
                        {user.address.map(|address| {
                            view! {
                                <p>
                                    <strong>"Address: "</strong>
                                    {address}
                                </p>
                            }
                        })}
                    </div>
                </div>
            }
        })
    }
}
