//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Anonymous landing route. Authenticated visitors get a shortcut to
/// their groups instead of the sign-up call to action.
#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();

    view! {
        <main class="home-page">
            <section class="home-page__hero">
                <h1>"Study better, together."</h1>
                <p>
                    "Find a study group, plan sessions, and keep each other on track."
                </p>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="home-page__actions">
                                <a href="/register" class="btn btn--primary">
                                    "Get started"
                                </a>
                                <a href="/login" class="btn">
                                    "Log in"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="home-page__actions">
                        <a href="/groups" class="btn btn--primary">
                            "Go to your groups"
                        </a>
                    </div>
                </Show>
            </section>
        </main>
    }
}
