//! Home page content.

use leptos::prelude::*;

use crate::components::layout::Layout;

const ACHIEVEMENTS: [(&str, &str); 4] = [
    ("50+", "Smart Cities"),
    ("1M+", "Citizens Served"),
    ("30%", "Energy Savings"),
    ("24/7", "Monitoring"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <section class="page">
                <h1>"Welcome to Smart Space"</h1>
                <ul class="page__stats">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|(value, label)| view! { <li><strong>{*value}</strong>" "{*label}</li> })
                        .collect_view()}
                </ul>
            </section>
        </Layout>
    }
}
