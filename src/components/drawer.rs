//! Mobile navigation drawer.

use leptos::prelude::*;

use crate::state::menus::MenuState;
use crate::state::session::SessionStore;

/// Slide-out drawer for narrow viewports. Link selection closes it; the
/// navbar also closes it on every route change.
#[component]
pub fn Drawer(menus: RwSignal<MenuState>) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();

    let close = move |_| menus.update(MenuState::close_all);

    view! {
        <Show when=move || menus.get().drawer_open>
            <div class="drawer">
                <a href="/" class="drawer__link" on:click=close>
                    "Home"
                </a>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <a href="/login" class="drawer__link" on:click=close>
                                "Log in"
                            </a>
                            <a href="/register" class="drawer__link" on:click=close>
                                "Sign up"
                            </a>
                        }
                    }
                >
                    <a href="/groups" class="drawer__link" on:click=close>
                        "Groups"
                    </a>
                </Show>
            </div>
        </Show>
    }
}
