//! Page Components

mod about;
mod checkout;
mod faq;
mod home;
mod services;
mod subscribe;

pub use about::AboutPage;
pub use checkout::CheckoutPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use services::ServicesPage;
pub use subscribe::SubscribePage;

use leptos::prelude::*;

use crate::content::Faq;

fn faq_cards(faqs: &'static [Faq]) -> impl IntoView {
    view! {
        <div class="card-grid">
            {faqs
                .iter()
                .map(|faq| view! {
                    <div class="card">
                        <h3>{faq.question}</h3>
                        <p>{faq.answer}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
