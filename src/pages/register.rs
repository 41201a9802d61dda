//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::forms::{AuthForm, FormStatus, PasswordStrength, password_strength};
use crate::state::session::SessionStore;

/// Registration form backed by the shared auth form state machine.
///
/// Registration does not authenticate (the server may require email
/// verification), so success stays on this page and shows the server's
/// message.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let form = RwSignal::new(AuthForm::register());

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
        if !form.try_update(AuthForm::begin_submit).unwrap_or(false) {
            return;
        }
        let credentials = form.with_untracked(AuthForm::credentials);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi;
            let result = store.register(&api, &credentials).await;
            match result {
                Ok(reply) => {
                    let _ = form.try_update(|f| f.succeed(reply.message));
                }
                Err(err) => {
                    let _ = form.try_update(|f| f.fail(&err));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    let strength = move || {
        let password = form.get().password;
        if password.is_empty() {
            return None;
        }
        let (label, class) = match password_strength(&password) {
            PasswordStrength::Weak => ("Weak", "auth-form__strength--weak"),
            PasswordStrength::Fair => ("Fair", "auth-form__strength--fair"),
            PasswordStrength::Strong => ("Strong", "auth-form__strength--strong"),
        };
        Some(view! {
            <span class=format!("auth-form__strength {class}")>{label}</span>
        })
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
                <h1>"Create your account"</h1>
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
                    {strength}
                </label>
                <label class="auth-form__terms">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().accepted_terms
                        disabled=move || form.get().is_submitting()
                        on:change=move |ev| {
                            form.update(|f| f.accepted_terms = event_target_checked(&ev));
                        }
                    />
                    "I agree to the terms of use"
                </label>
                {message}
                <button
                    type="submit"
                    class="btn btn--primary auth-form__submit"
                    disabled=move || {
                        let state = form.get();
                        state.is_submitting() || !state.accepted_terms
                    }
                >
                    {move || {
                        if form.get().is_submitting() { "Creating account..." } else { "Sign up" }
                    }}
                </button>
                <p class="auth-form__alt">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </form>
        </main>
    }
}
