//! Contact details.

use leptos::prelude::*;

use crate::components::layout::Layout;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Layout>
            <section class="page">
                <h1>"Contact Us"</h1>
                <p>"Email: info@smartspace.example"</p>
                <p>"Phone: +1 (555) 010-2030"</p>
            </section>
        </Layout>
    }
}
