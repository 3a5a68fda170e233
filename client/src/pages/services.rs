//! Services catalogue with a detail overlay per service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicking a card opens its detail overlay; the backdrop or the close button
//! dismisses it. Clicks inside the panel do not reach the backdrop.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::state::service_detail::ServiceDetailState;

/// One entry in the services catalogue.
#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub benefits: [&'static str; 4],
}

pub static SERVICES: [Service; 4] = [
    Service {
        id: "traffic",
        title: "Smart Traffic Management",
        description: "AI-powered traffic control systems to reduce congestion and improve road safety.",
        features: [
            "Real-time traffic monitoring",
            "Adaptive signal control",
            "Incident detection",
            "Emergency vehicle priority",
        ],
        benefits: [
            "Reduced travel time",
            "Lower emissions",
            "Improved emergency response",
            "Enhanced pedestrian safety",
        ],
    },
    Service {
        id: "waste",
        title: "Waste Management",
        description: "Efficient waste collection and recycling systems for a cleaner environment.",
        features: [
            "Smart bin monitoring",
            "Optimized collection routes",
            "Recycling analytics",
            "Waste sorting automation",
        ],
        benefits: [
            "Reduced operational costs",
            "Improved recycling rates",
            "Cleaner streets",
            "Lower environmental impact",
        ],
    },
    Service {
        id: "energy",
        title: "Smart Energy",
        description: "Sustainable energy solutions with real-time monitoring and optimization.",
        features: [
            "Smart grid integration",
            "Renewable energy management",
            "Demand response",
            "Energy consumption analytics",
        ],
        benefits: [
            "Reduced energy costs",
            "Lower carbon footprint",
            "Improved grid reliability",
            "Sustainable power supply",
        ],
    },
    Service {
        id: "parking",
        title: "Smart Parking",
        description: "Find and reserve parking spots easily with our smart parking system.",
        features: [
            "Real-time availability",
            "Mobile reservations",
            "Automated payment",
            "Navigation assistance",
        ],
        benefits: [
            "Reduced parking time",
            "Lower traffic congestion",
            "Improved user experience",
            "Optimized space utilization",
        ],
    },
];

/// Catalogue entry for the open overlay. Out-of-range selections show nothing.
fn selected_service(state: ServiceDetailState) -> Option<&'static Service> {
    state.selected.and_then(|index| SERVICES.get(index))
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let detail = RwSignal::new(ServiceDetailState::default());

    view! {
        <Layout>
            <section class="page">
                <h1>"Our Services"</h1>
                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            view! {
                                <button
                                    class="services__card"
                                    on:click=move |_| detail.update(|d| d.open(index))
                                >
                                    <h2>{service.title}</h2>
                                    <p>{service.description}</p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || selected_service(detail.get()).map(|service| service_overlay(service, detail))}
            </section>
        </Layout>
    }
}

fn service_overlay(service: &'static Service, detail: RwSignal<ServiceDetailState>) -> impl IntoView {
    view! {
        <div class="services__backdrop" on:click=move |_| detail.update(ServiceDetailState::close)>
            <div class="services__panel" on:click=|ev| ev.stop_propagation()>
                <button
                    class="services__close"
                    aria-label="Close"
                    on:click=move |_| detail.update(ServiceDetailState::close)
                >
                    "\u{2715}"
                </button>
                <h2>{service.title}</h2>
                <p>{service.description}</p>
                <div class="services__columns">
                    <div>
                        <h3>"Key Features"</h3>
                        <ul>{service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
                    </div>
                    <div>
                        <h3>"Benefits"</h3>
                        <ul>{service.benefits.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}</ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
