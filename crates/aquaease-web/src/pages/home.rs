//! Home Page

use leptos::prelude::*;

use crate::components::CardGrid;
use crate::content::{FAQS, SERVICES, TAGLINE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <div>
                    <p class="eyebrow">"To your door"</p>
                    <h1>{TAGLINE}</h1>
                    <p class="tagline">
                        "AquaEase delivers purified 5-gallon water jugs with an easy-to-use dispenser "
                        "straight to your dorm or off-campus housing. Enjoy clean, refreshing water "
                        "anytime, without the hassle."
                    </p>
                    <div class="cta">
                        <a href="/subscribe" class="btn btn-primary">"Build my plan"</a>
                        <a href="/services" class="btn">"See how it works"</a>
                    </div>
                    <div class="stats">
                        {[("5-gal", "purified jugs"), ("Roommate", "split friendly"), ("Campus", "focused")]
                            .into_iter()
                            .map(|(value, label)| view! {
                                <div class="stat">
                                    <p class="stat-value">{value}</p>
                                    <p class="stat-label">{label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="delivery-card">
                    <p class="eyebrow">"Next delivery"</p>
                    <h2>"Wednesday 6-8 PM"</h2>
                    <p>"North Lake Village"</p>
                    <ul>
                        <li><span>"Order"</span>" 3 jugs"</li>
                        <li><span>"Status"</span>" Packed, delivery crew assigned"</li>
                        <li><span>"ETA"</span>" On time, text updates enabled"</li>
                    </ul>
                </div>
            </header>

            <section class="preview">
                <p class="eyebrow">"Services preview"</p>
                <h2>"A delivery experience designed for students"</h2>
                <a href="/services">"See full services"</a>
                <CardGrid cards=&SERVICES />
            </section>

            <section class="preview">
                <p class="eyebrow">"FAQ preview"</p>
                <h2>"Questions students ask first"</h2>
                <a href="/faq">"View all FAQs"</a>
                {super::faq_cards(&FAQS)}
            </section>
        </div>
    }
}
