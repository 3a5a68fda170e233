//! Top navigation bar with the session-dependent link set.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links come from `util::nav_links` on every render. Route links are plain
//! anchors; the logout action mutates the session and then redirects through
//! an effect, mirroring how the router expects programmatic navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::menu::MenuState;
use crate::state::session::SessionState;
use crate::util::nav_links::{NavLink, NavTarget, activate, is_active, links};
use crate::util::routes::AppRoute;

/// Site navigation: brand, desktop links, and collapsible mobile menu.
#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let pending_redirect = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(path) = pending_redirect.get() {
            pending_redirect.set(None);
            navigate(path, NavigateOptions::default());
        }
    });

    let on_activate = Callback::new(move |link: NavLink| {
        if !link.changes_session() {
            menu.update(MenuState::close);
            return;
        }
        let mut redirect = None;
        session.update(|s| menu.update(|m| redirect = activate(&link, s, m)));
        if redirect.is_some() {
            pending_redirect.set(redirect);
        }
    });

    let link_items = move |item_class: &'static str| {
        let current_path = pathname.get();
        links(session.get().is_authenticated())
            .into_iter()
            .map(|link| nav_item(link, is_active(&link, &current_path), item_class, on_activate))
            .collect_view()
    };

    view! {
        <nav class="nav">
            <div class="nav__bar">
                <a href=AppRoute::Home.path() class="nav__brand" on:click=move |_| menu.update(MenuState::close)>
                    "Smart Space"
                </a>
                <div class="nav__links">{move || link_items("nav__link")}</div>
                <button
                    class="nav__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || if menu.get().expanded { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <div class="nav__mobile" class:nav__mobile--open=move || menu.get().expanded>
                {move || link_items("nav__mobile-link")}
            </div>
        </nav>
    }
}

fn nav_item(link: NavLink, active: bool, item_class: &'static str, on_activate: Callback<NavLink>) -> AnyView {
    match link.target {
        NavTarget::Route(route) => view! {
            <a
                href=route.path()
                class=item_class
                class:nav__link--active=active
                on:click=move |_| on_activate.run(link)
            >
                {link.label}
            </a>
        }
        .into_any(),
        NavTarget::Action(_) => view! {
            <button class=item_class on:click=move |_| on_activate.run(link)>
                {link.label}
            </button>
        }
        .into_any(),
    }
}
