//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::forms::{AuthForm, FormStatus};
use crate::state::session::SessionStore;

/// Login form backed by the shared auth form state machine.
///
/// Already-authenticated visitors are redirected to their groups; a
/// successful login flips the session store, which triggers the same
/// redirect.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let form = RwSignal::new(AuthForm::login());

    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate("/groups", NavigateOptions::default());
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = form.with_untracked(AuthForm::validate) {
            form.update(|f| f.fail(&err));
            return;
        }
        // Single-flight: a second submit while one is in flight is a no-op.
        if !form.try_update(AuthForm::begin_submit).unwrap_or(false) {
            return;
        }
        let credentials = form.with_untracked(AuthForm::credentials);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi;
            let result = store.login(&api, &credentials).await;
            // The redirect effect may have unmounted this form already;
            // try_update guards against writing to a disposed signal.
            match result {
                Ok(()) => {
                    let _ = form.try_update(|f| f.succeed(None));
                }
                Err(err) => {
                    let _ = form.try_update(|f| f.fail(&err));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    let message = move || {
        let state = form.get();
        state.message.map(|text| {
            let class = if state.status == FormStatus::Succeeded {
                "auth-form__message auth-form__message--ok"
            } else {
                "auth-form__message auth-form__message--err"
            };
            view! {
                <p class=class role="status">
                    {text}
                </p>
            }
        })
    };

    view! {
        <main class="auth-page">
            <form class="auth-form" on:submit=submit>
                <h1>"Log in"</h1>
                <label class="auth-form__label">
                    "Email"
                    <input
                        type="email"
                        class="auth-form__input"
                        prop:value=move || form.get().email
                        disabled=move || form.get().is_submitting()
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        type="password"
                        class="auth-form__input"
                        prop:value=move || form.get().password
                        disabled=move || form.get().is_submitting()
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                {message}
                <button
                    type="submit"
                    class="btn btn--primary auth-form__submit"
                    disabled=move || form.get().is_submitting()
                >
                    {move || if form.get().is_submitting() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-form__alt">
                    "New here? " <a href="/register">"Create an account"</a>
                </p>
            </form>
        </main>
    }
}
