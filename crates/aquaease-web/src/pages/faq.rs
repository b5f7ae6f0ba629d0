//! FAQ Page

use leptos::prelude::*;

use crate::content::FAQS;

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <section class="page">
            <p class="eyebrow">"FAQ"</p>
            <h1>"Answers before you subscribe"</h1>
            <p class="lead">
                "Here is what students ask most often. Still have questions? We are happy to help."
            </p>
            {super::faq_cards(&FAQS)}
        </section>
    }
}
