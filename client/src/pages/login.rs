//! Login page: email + password against the backend login endpoint.

use auth::login::LoginForm;
#[cfg(not(feature = "csr"))]
use auth::login::LoginError;
use auth::routes::REGISTER_ROUTE;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::auth::install_signed_in_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());

    install_signed_in_redirect(auth, navigate.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&request).await;
                let next = form
                    .try_update(|f| auth.try_update(|ctx| f.finish(ctx, result)))
                    .flatten()
                    .flatten();
                if let Some(path) = next {
                    navigate(path, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &navigate);
            let unavailable = LoginError::Transport("not available outside the browser".to_owned());
            form.update(|f| {
                auth.update(|ctx| {
                    let _ = f.finish(ctx, Err(unavailable));
                });
            });
        }
    };

    let displayed_error = move || {
        form.with(|f| auth.with(|ctx| f.displayed_error(ctx.state()).map(ToOwned::to_owned)))
    };

    view! {
        <div class="container">
            <div class="card login-card">
                <h2 class="text-center">"Login"</h2>

                {move || displayed_error().map(|message| view! { <div class="alert alert-danger">{message}</div> })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email" class="form-label">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            class="form-control"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password" class="form-label">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            class="form-control"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn login-submit" disabled=move || form.with(LoginForm::is_submitting)>
                        {move || if form.with(LoginForm::is_submitting) { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="text-center login-footer">
                    "Don't have an account? "
                    <A href=REGISTER_ROUTE>"Register"</A>
                </p>
            </div>
        </div>
    }
}
