//! Header, footer and shared card layouts

use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{Card, INSTAGRAM_HANDLE, INSTAGRAM_URL, NAV_LINKS, TAGLINE};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="brand">
                <div class="brand-mark">"Æ"</div>
                <div>
                    <p class="eyebrow">"AquaEase"</p>
                    <p class="brand-sub">"Campus Water Delivery"</p>
                </div>
            </a>
            <nav class="nav">
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <a href="/subscribe" class="btn btn-primary">"Get started"</a>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <p>{format!("© {year} AquaEase. All rights reserved.")}</p>
            <div class="footer-links">
                <span>{TAGLINE}</span>
                <a href=INSTAGRAM_URL rel="noreferrer" target="_blank">{INSTAGRAM_HANDLE}</a>
            </div>
        </footer>
    }
}

/// Title + description cards
#[component]
pub fn CardGrid(cards: &'static [Card], #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("card-grid {class}")>
            {cards
                .iter()
                .map(|card| view! {
                    <div class="card">
                        <h3>{card.title}</h3>
                        <p>{card.description}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
