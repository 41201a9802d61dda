//! Identity chip with the profile dropdown.

use leptos::prelude::*;

use crate::components::dismissible::Dismissible;
use crate::net::types::Profile;
use crate::state::menus::MenuState;

/// Identity chip (photo + display name) that toggles the profile menu.
///
/// The menu closes on outside click, on route change (the navbar resets
/// all menus), and when an item is selected. Sign out is delegated to the
/// navbar through `on_logout`.
#[component]
pub fn ProfileMenu(
    user: Profile,
    menus: RwSignal<MenuState>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || menus.get().profile_open);
    let on_dismiss = Callback::new(move |()| menus.update(|m| m.profile_open = false));

    let display_name = user.display_name().to_owned();
    let email = user.email.clone();
    let photo = user.photo_url.clone();

    view! {
        <Dismissible active=open on_dismiss=on_dismiss>
            <button
                class="navbar__chip"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| menus.update(MenuState::toggle_profile)
            >
                {photo.map(|src| view! { <img class="navbar__avatar" src=src alt=""/> })}
                <span class="navbar__chip-name">{display_name}</span>
            </button>
            <Show when=move || open.get()>
                <ul class="menu menu--profile" role="menu">
                    <li class="menu__meta">{email.clone()}</li>
                    <li>
                        <a
                            href="/groups"
                            class="menu__item"
                            role="menuitem"
                            on:click=move |_| menus.update(MenuState::close_all)
                        >
                            "My groups"
                        </a>
                    </li>
                    <li>
                        <button
                            class="menu__item menu__item--danger"
                            role="menuitem"
                            on:click=move |_| on_logout.run(())
                        >
                            "Sign out"
                        </button>
                    </li>
                </ul>
            </Show>
        </Dismissible>
    }
}
