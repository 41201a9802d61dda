//! Reusable dismissible region for dropdowns and popovers.
//!
//! Wraps a trigger and its popup in one DOM subtree and closes the popup
//! when a click lands anywhere outside that subtree. Each region owns its
//! own document-level listener, so independent menus can coexist without
//! interfering with each other.

use leptos::html;
use leptos::prelude::*;

/// Region that calls `on_dismiss` on any outside click while `active`.
///
/// The trigger must live inside the region, otherwise the same click that
/// opens the popup would immediately dismiss it. On the server this is
/// just a wrapper element.
#[component]
pub fn Dismissible(
    /// Whether the region currently has something open to dismiss.
    #[prop(into)]
    active: Signal<bool>,
    /// Invoked when a click occurs outside the region while active.
    on_dismiss: Callback<()>,
    children: Children,
) -> impl IntoView {
    let region: NodeRef<html::Div> = NodeRef::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let handler =
            Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
                if !active.get_untracked() {
                    return;
                }
                let Some(root) = region.get_untracked() else {
                    return;
                };
                let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                if !root.contains(target.as_ref()) {
                    on_dismiss.run(());
                }
            });

        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
            on_cleanup(move || {
                let _ = doc
                    .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
                drop(handler);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (active, on_dismiss);
    }

    view! {
        <div class="dismissible" node_ref=region>
            {children()}
        </div>
    }
}
