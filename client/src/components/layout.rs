//! Page frame shared by the content routes.

use leptos::prelude::*;

use crate::components::navigation::Navigation;

/// Fixed navigation bar above the page body.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navigation/>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
