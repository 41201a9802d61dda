//! Persistent top navigation bar.
//!
//! Switches between the anonymous and authenticated views based on the
//! session store, owns the transient menu state (profile menu, create
//! menu, mobile drawer), and drives sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::create_menu::CreateMenu;
use crate::components::drawer::Drawer;
use crate::components::profile_menu::ProfileMenu;
use crate::state::menus::MenuState;
use crate::state::session::SessionStore;

/// Navigation bar rendered on every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let menus = RwSignal::new(MenuState::default());
    let location = use_location();
    let navigate = use_navigate();

    // Menus are transient: every route change closes them.
    Effect::new(move || {
        let _ = location.pathname.get();
        menus.update(MenuState::close_all);
    });

    // Sign out: menus shut, local session cleared (remote invalidation is
    // best-effort), then land on the public home page with the history
    // entry replaced so Back cannot return to an authenticated route.
    let on_logout = Callback::new(move |()| {
        menus.update(MenuState::close_all);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                store.logout(&crate::net::api::HttpAuthApi).await;
                navigate(
                    "/",
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                );
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    });

    let identity = move || {
        let state = session.get();
        if state.loading {
            // Placeholder while the session is being restored; no menu is
            // attached to it.
            view! { <span class="navbar__session navbar__skeleton" aria-hidden="true"></span> }
                .into_any()
        } else if let Some(user) = state.user {
            view! {
                <span class="navbar__session">
                    <CreateMenu menus=menus/>
                    <ProfileMenu user=user menus=menus on_logout=on_logout/>
                </span>
            }
            .into_any()
        } else {
            view! {
                <span class="navbar__session">
                    <a href="/login" class="navbar__link">
                        "Log in"
                    </a>
                    <a href="/register" class="btn btn--primary navbar__cta">
                        "Sign up"
                    </a>
                </span>
            }
            .into_any()
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <button
                    class="navbar__burger"
                    aria-label="Menu"
                    on:click=move |_| menus.update(MenuState::toggle_drawer)
                >
                    "\u{2630}"
                </button>
                <a href="/" class="navbar__brand">
                    "StudyHall"
                </a>
                <div class="navbar__links">
                    <Show when=move || session.get().is_authenticated()>
                        <a href="/groups" class="navbar__link">
                            "Groups"
                        </a>
                    </Show>
                </div>
                <span class="navbar__spacer"></span>
                {identity}
            </div>
            <Drawer menus=menus/>
        </nav>
    }
}
