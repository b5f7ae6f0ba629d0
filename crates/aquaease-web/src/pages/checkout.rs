//! Checkout Page

use leptos::prelude::*;

use crate::components::CheckoutForm;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <section class="page">
            <p class="eyebrow">"Checkout"</p>
            <h1>"Complete your subscription"</h1>
            <p class="lead">
                "Add your contact and delivery details, then enter payment information to finish "
                "your subscription."
            </p>
        </section>
        <CheckoutForm />
    }
}
