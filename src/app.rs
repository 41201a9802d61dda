//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::pages::{groups::GroupsPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the one session store for the application lifetime, provides
/// it via context, kicks off the startup session restore, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    provide_context(store);

    // One-shot restore of any persisted session; resolves the initial
    // loading state whether or not a session is found.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        store.restore(&crate::net::api::HttpAuthApi).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/studyhall.css"/>
        <Title text="StudyHall"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("groups") view=GroupsPage/>
            </Routes>
        </Router>
    }
}
