//! Services Page

use leptos::prelude::*;

use crate::components::CardGrid;
use crate::content::{SERVICES, SERVICE_DETAILS};

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="page">
            <p class="eyebrow">"Services"</p>
            <h1>"Everything you need to stay hydrated"</h1>
            <p class="lead">
                "AquaEase is built for students who want consistent water deliveries without the "
                "hassle. We handle scheduling, routing, and communication so you can focus on campus life."
            </p>
            <CardGrid cards=&SERVICES />
            <CardGrid cards=&SERVICE_DETAILS class="details" />
        </section>
    }
}
