//! Checkout Form
//!
//! Contact → split request → payment element → paid. Entered either from
//! the plan builder (auto-starts) or stand-alone at `/checkout?term=&jugs=`.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use aquaease_core::checkout::{return_url, share_heading};
use aquaease_core::{CheckoutHandoff, CheckoutStage, CheckoutState, ClientConfig, RoommateLink};

use crate::api;
use crate::app::site_config;
use crate::stripe_js::{copy_to_clipboard, PaymentForm};

/// Waits for the client config, then renders the checkout
#[component]
pub fn CheckoutForm(#[prop(optional)] handoff: Option<CheckoutHandoff>) -> impl IntoView {
    let config = site_config();

    move || match config.get() {
        Some(config) => view! { <CheckoutPanel config=config handoff=handoff.clone() /> }.into_any(),
        None => view! { <p class="loading">"Loading payment form..."</p> }.into_any(),
    }
}

#[component]
fn CheckoutPanel(config: ClientConfig, handoff: Option<CheckoutHandoff>) -> impl IntoView {
    let query = use_query_map();
    let initial = match handoff {
        Some(h) => CheckoutState::from_handoff(h),
        None => {
            let (term, jugs) = query.with_untracked(|q| (q.get("term"), q.get("jugs")));
            CheckoutState::from_query(&config.prices, term.as_deref(), jugs.as_deref())
        }
    };

    let blocking = initial.blocking_error(config.publishable_key.as_deref());
    let auto_start = initial.auto_start;
    let state = RwSignal::new(initial);

    let paid = Memo::new(move |_| state.with(|s| s.stage == CheckoutStage::Paid));

    let start = move || {
        let Some(request) = state.try_update(CheckoutState::start).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::create_subscription(&request).await;
            state.update(|s| s.started(result));
        });
    };

    if auto_start && blocking.is_none() {
        start();
    }

    let publishable_key = config.publishable_key.unwrap_or_default();

    move || {
        if paid.get() {
            return paid_view(state.with_untracked(|s| s.roommate_links.clone())).into_any();
        }
        if let Some(message) = blocking {
            return view! { <section class="checkout"><div class="alert">{message}</div></section> }.into_any();
        }

        view! {
            <section class="checkout">
                {(!auto_start).then(|| contact_section(state))}
                <div class="checkout-section">
                    <p class="eyebrow">"Payment"</p>
                    {payment_section(state, publishable_key.clone(), start)}
                </div>
            </section>
        }
        .into_any()
    }
}

fn contact_section(state: RwSignal<CheckoutState>) -> impl IntoView {
    view! {
        <div class="checkout-section">
            <p class="eyebrow">"Contact"</p>
            <div class="field">
                <label>"Full name"</label>
                <input
                    type="text"
                    placeholder="Jordan Rivera"
                    prop:value=move || state.with(|s| s.contact.name.clone())
                    on:input=move |ev| state.update(|s| s.contact.name = event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label>"School email"</label>
                <input
                    type="email"
                    placeholder="name@school.edu"
                    prop:value=move || state.with(|s| s.contact.email.clone())
                    on:input=move |ev| state.update(|s| s.contact.email = event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label>"Phone number"</label>
                <input
                    type="tel"
                    placeholder="(239) 555-0123"
                    prop:value=move || state.with(|s| s.contact.phone.clone())
                    on:input=move |ev| state.update(|s| s.contact.phone = event_target_value(&ev))
                />
            </div>
        </div>
        <div class="checkout-section">
            <p class="eyebrow">"Delivery"</p>
            <div class="field">
                <label>"Dorm/Building or Address"</label>
                <input
                    type="text"
                    placeholder="SoVi / North Lake Village"
                    prop:value=move || state.with(|s| s.building.clone())
                    on:input=move |ev| state.update(|s| s.building = event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label>"Room or Unit"</label>
                <input
                    type="text"
                    placeholder="B-204"
                    prop:value=move || state.with(|s| s.room.clone())
                    on:input=move |ev| state.update(|s| s.room = event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label>"Delivery instructions (optional)"</label>
                <textarea placeholder="Gate code, preferred drop spot, etc." rows="3"></textarea>
            </div>
        </div>
    }
}

fn payment_section(
    state: RwSignal<CheckoutState>,
    publishable_key: String,
    start: impl Fn() + Copy + Send + 'static,
) -> impl IntoView {
    let secret = Memo::new(move |_| state.with(|s| s.client_secret().map(str::to_string)));
    let starting = Memo::new(move |_| state.with(|s| s.stage == CheckoutStage::Starting));
    let can_start = Memo::new(move |_| state.with(CheckoutState::can_start));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));

    let confirming = RwSignal::new(false);
    let payment_form = StoredValue::new_local(None::<PaymentForm>);
    let payment_ref = NodeRef::<Div>::new();

    // Mount the payment element once its container is in the DOM
    Effect::new(move |_| {
        let (Some(target), Some(secret)) = (payment_ref.get(), secret.get()) else {
            return;
        };
        if payment_form.with_value(Option::is_some) {
            return;
        }
        match PaymentForm::mount(&publishable_key, &secret, target.as_ref()) {
            Ok(form) => payment_form.set_value(Some(form)),
            Err(message) => state.update(|s| s.error = Some(message)),
        }
    });

    let confirm = move |_| {
        let Some(form) = payment_form.get_value() else {
            return;
        };
        confirming.set(true);
        leptos::task::spawn_local(async move {
            let result = form.confirm(&return_url(&api::origin())).await;
            state.update(|s| s.confirmed(result));
            confirming.set(false);
        });
    };

    view! {
        {move || {
            if secret.get().is_some() {
                view! {
                    <div class="payment">
                        <div node_ref=payment_ref class="payment-element"></div>
                        <button class="btn btn-primary" disabled=move || confirming.get() on:click=confirm>
                            {move || if confirming.get() { "Processing..." } else { "Place order" }}
                        </button>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <button
                        class="btn btn-primary"
                        disabled=move || !can_start.get() || starting.get()
                        on:click=move |_| start()
                    >
                        {move || if starting.get() { "Starting payment..." } else { "Continue to payment" }}
                    </button>
                }
                .into_any()
            }
        }}
        {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
    }
}

fn paid_view(links: Vec<RoommateLink>) -> impl IntoView {
    view! {
        <section class="checkout paid">
            <p class="eyebrow">"Payment received"</p>
            <h2>"You are all set!"</h2>
            <p>"We will be in touch to confirm your first delivery. Thank you for subscribing to AquaEase."</p>
            <div class="roommate-links">
                {links
                    .into_iter()
                    .map(|link| {
                        let heading = share_heading(&link);
                        let url = link.url;
                        let copy_url = url.clone();
                        view! {
                            <div class="roommate-link">
                                <p class="heading">{heading}</p>
                                <p>"They can use this link to pay their share."</p>
                                <div class="copy-row">
                                    <input readonly value=url />
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            let url = copy_url.clone();
                                            leptos::task::spawn_local(async move {
                                                if let Err(e) = copy_to_clipboard(&url).await {
                                                    leptos::logging::warn!("Copy failed: {e}");
                                                }
                                            });
                                        }
                                    >
                                        "Copy"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
