//! Landing page shown at `/`, outside the main layout.

use leptos::prelude::*;

use crate::util::routes::AppRoute;

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("98%", "User Satisfaction"),
    ("24/7", "System Monitoring"),
    ("50+", "Smart Services"),
    ("30%", "Resource Savings"),
];

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="welcome">
            <h1>"Smart Space"</h1>
            <p class="welcome__subtitle">"Connected services for a cleaner, safer city."</p>
            <div class="welcome__actions">
                <a href=AppRoute::Home.path() class="btn">"Explore"</a>
                <a href=AppRoute::LOGIN.path() class="btn btn--secondary">"Sign in"</a>
            </div>
            <ul class="welcome__stats">
                {HIGHLIGHTS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <li>
                                <strong>{*value}</strong>
                                <span>{*label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
