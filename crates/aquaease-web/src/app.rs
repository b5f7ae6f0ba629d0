//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use aquaease_core::ClientConfig;

use crate::api;
use crate::components::{SiteFooter, SiteHeader};
use crate::pages::{AboutPage, CheckoutPage, FaqPage, HomePage, ServicesPage, SubscribePage};

/// Client configuration from `/api/config`; `None` until loaded
#[derive(Clone, Copy)]
pub struct SiteConfig(pub RwSignal<Option<ClientConfig>>);

impl SiteConfig {
    pub fn get(self) -> Option<ClientConfig> {
        self.0.get()
    }
}

/// The site configuration from context
pub fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_else(|| SiteConfig(RwSignal::new(Some(ClientConfig::default()))))
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<ClientConfig>);
    provide_context(SiteConfig(config));

    leptos::task::spawn_local(async move {
        let loaded = api::fetch_config().await.unwrap_or_else(|e| {
            leptos::logging::warn!("Could not load client config: {e}");
            ClientConfig::default()
        });
        config.set(Some(loaded));
    });

    view! {
        <Router>
            <SiteHeader />
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/faq") view=FaqPage />
                    <Route path=path!("/subscribe") view=SubscribePage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}
