//! City dashboard, visible to signed-in visitors only.
//!
//! SYSTEM CONTEXT
//! ==============
//! The figures are fixed sample values; there is no metrics source.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;

const STATS: [(&str, &str); 4] = [
    ("Energy Usage", "892 kWh"),
    ("Waste Collected", "4.2 tons"),
    ("Air Quality", "Good"),
    ("Active Citizens", "12,345"),
];

/// Dashboard page. Redirects to `/auth` when the session is signed out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <ProtectedRoute>
                <section class="page dashboard">
                    <h1>"City Dashboard"</h1>
                    <div class="dashboard__stats">
                        {STATS
                            .iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="dashboard__stat">
                                        <span class="dashboard__stat-label">{*label}</span>
                                        <strong>{*value}</strong>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </ProtectedRoute>
        </Layout>
    }
}
