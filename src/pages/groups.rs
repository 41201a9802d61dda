//! Authenticated groups page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// Landing page for signed-in users.
/// Redirects to `/login` once the session restore has resolved to
/// anonymous.
#[component]
pub fn GroupsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let navigate = use_navigate();

    // Route guard: wait for restore to settle before deciding.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |u| format!("Welcome, {}.", u.display_name()))
    };

    view! {
        <main class="groups-page">
            <header class="groups-page__header">
                <h1>"Your study groups"</h1>
                <p class="groups-page__greeting">{greeting}</p>
            </header>
            <section class="groups-page__empty">
                <p>"You have not joined any groups yet."</p>
                <p>"Use the create menu in the navigation bar to start one."</p>
            </section>
        </main>
    }
}
