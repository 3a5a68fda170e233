//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::pages::{
    auth::AuthPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage, services::ServicesPage,
    welcome::WelcomePage,
};
use crate::state::{menu::MenuState, session::SessionState};
use crate::util::routes::AppRoute;

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
/// Owns the session and menu state for the lifetime of the page and sets up
/// client-side routing. Unknown paths redirect to the home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let menu = RwSignal::new(MenuState::default());

    provide_context(session);
    provide_context(menu);

    view! {
        <Stylesheet id="leptos" href="/pkg/smartspace.css"/>
        <Title text="Smart Space"/>

        <Router>
            <Routes fallback=UnknownRoute>
                <Route path=StaticSegment(AppRoute::Welcome.segment()) view=WelcomePage/>
                <Route path=StaticSegment(AppRoute::Auth.segment()) view=AuthPage/>
                <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(AppRoute::Services.segment()) view=ServicesPage/>
                <Route path=StaticSegment(AppRoute::Contact.segment()) view=ContactPage/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Catch-all for paths no route matched: redirect to the closest known route.
#[component]
fn UnknownRoute() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    view! { <Redirect path=AppRoute::resolve(&pathname).path()/> }
}
