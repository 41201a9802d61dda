//! Create dropdown for starting new groups and sessions.

use leptos::prelude::*;

use crate::components::dismissible::Dismissible;
use crate::state::menus::MenuState;

/// "+ Create" button with its dropdown. Only rendered for authenticated
/// users; closes on outside click, route change, or item selection.
#[component]
pub fn CreateMenu(menus: RwSignal<MenuState>) -> impl IntoView {
    let open = Signal::derive(move || menus.get().create_open);
    let on_dismiss = Callback::new(move |()| menus.update(|m| m.create_open = false));

    view! {
        <Dismissible active=open on_dismiss=on_dismiss>
            <button
                class="btn navbar__create"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| menus.update(MenuState::toggle_create)
            >
                "+ Create"
            </button>
            <Show when=move || open.get()>
                <ul class="menu menu--create" role="menu">
                    <li>
                        <a
                            href="/groups"
                            class="menu__item"
                            role="menuitem"
                            on:click=move |_| menus.update(MenuState::close_all)
                        >
                            "New group"
                        </a>
                    </li>
                    <li>
                        <a
                            href="/groups"
                            class="menu__item"
                            role="menuitem"
                            on:click=move |_| menus.update(MenuState::close_all)
                        >
                            "New study session"
                        </a>
                    </li>
                </ul>
            </Show>
        </Dismissible>
    }
}
