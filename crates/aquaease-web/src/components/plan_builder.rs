//! Plan Builder
//!
//! Three-step form (plan, contact, schedule). Submitting hands the plan and
//! contact details to the checkout form in place.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use aquaease_core::builder::{DELIVERY_DAYS, DELIVERY_WINDOWS};
use aquaease_core::plan::format_usd;
use aquaease_core::{CheckoutHandoff, FormState, JugCount, RoommateField, Step, SubscriptionPlan, Term};

use crate::app::site_config;
use crate::components::CheckoutForm;

#[component]
pub fn PlanBuilder() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let handoff = RwSignal::new(None::<CheckoutHandoff>);
    let config = site_config();

    // Deep links from the pricing cards preselect the plan
    let query = use_query_map();
    Effect::new(move |_| {
        let (term, jugs) = query.with(|q| (q.get("term"), q.get("jugs")));
        form.update(|f| f.seed_from_query(term.as_deref(), jugs.as_deref()));
    });

    let subscribe = move || {
        let prices = config.get().map(|c| c.prices).unwrap_or_default();
        if let Some(h) = form.with(|f| f.submit(&prices)) {
            handoff.set(Some(h));
        }
    };

    move || match handoff.get() {
        Some(h) => view! {
            <div id="plan" class="plan-builder">
                <button class="btn btn-link" on:click=move |_| handoff.set(None)>
                    "Back to plan"
                </button>
                <CheckoutForm handoff=h />
            </div>
        }
        .into_any(),
        None => builder(form, subscribe).into_any(),
    }
}

fn builder(form: RwSignal<FormState>, subscribe: impl Fn() + Copy + Send + 'static) -> impl IntoView {
    let step = Memo::new(move |_| form.with(|f| f.step));
    let ready = Memo::new(move |_| form.with(FormState::step_ready));

    view! {
        <div id="plan" class="plan-builder">
            <div class="builder-head">
                <div>
                    <p class="eyebrow">"Subscribe"</p>
                    <h3>"Build your delivery plan"</h3>
                </div>
                <div class="steps">
                    {Step::ALL
                        .into_iter()
                        .map(|s| view! {
                            <button
                                class=move || if step.get() == s { "step active" } else { "step" }
                                on:click=move |_| form.update(|f| f.jump_to(s))
                            >
                                <span class="step-number">{s.index() + 1}</span>
                                <span>{s.label()}</span>
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="builder-body">
                {move || match step.get() {
                    Step::Plan => plan_step(form).into_any(),
                    Step::Contact => contact_step(form).into_any(),
                    Step::Schedule => schedule_step(form).into_any(),
                }}
            </div>

            <div class="builder-actions">
                <button
                    class="btn"
                    disabled=move || step.get() == Step::Plan
                    on:click=move |_| form.update(FormState::back)
                >
                    "Back"
                </button>
                {move || {
                    let class = if ready.get() { "btn btn-primary" } else { "btn btn-disabled" };
                    if step.get().is_last() {
                        view! { <button class=class on:click=move |_| subscribe()>"Subscribe"</button> }
                            .into_any()
                    } else {
                        view! {
                            <button class=class on:click=move |_| { form.update(|f| { f.advance(); }); }>
                                "Continue"
                            </button>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn plan_step(form: RwSignal<FormState>) -> impl IntoView {
    let term = Memo::new(move |_| form.with(|f| f.term));
    let jugs = Memo::new(move |_| form.with(|f| f.jugs));

    view! {
        <div class="field">
            <label>"Subscription term"</label>
            <div class="choices">
                {[(Term::Semester, "Semester"), (Term::FullYear, "Year long")]
                    .into_iter()
                    .map(|(value, label)| view! {
                        <button
                            class=move || if term.get() == Some(value) { "choice active" } else { "choice" }
                            on:click=move |_| form.update(|f| f.term = Some(value))
                        >
                            {label}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
        <div class="field">
            <label>"Plan"</label>
            <div class="choices">
                {JugCount::ALL
                    .into_iter()
                    .map(|count| view! {
                        <button
                            class=move || if jugs.get() == Some(count) { "choice plan active" } else { "choice plan" }
                            on:click=move |_| form.update(|f| f.jugs = Some(count))
                        >
                            <span class="tier">{count.tier()}</span>
                            <span class="detail">{format!("{count} jugs/month")}</span>
                            <span class="price">
                                {move || {
                                    SubscriptionPlan::new(term.get().unwrap_or_default(), count)
                                        .display_price_label()
                                }}
                            </span>
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn text_input(
    form: RwSignal<FormState>,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&FormState) -> String,
    set: fn(&mut FormState, String),
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

fn contact_step(form: RwSignal<FormState>) -> impl IntoView {
    let rows = Memo::new(move |_| form.with(|f| f.roommates.len()));
    let per_person = Memo::new(move |_| form.with(FormState::per_person_price));

    view! {
        {text_input(form, "Name", "Jordan Rivera", |f| f.name.clone(), |f, v| f.name = v)}
        {text_input(form, "School email", "name@eagle.fgcu.edu", |f| f.email.clone(), |f, v| f.email = v)}

        <div class="field roommates">
            <label>"Roommates " <span class="hint">"(optional, split the cost)"</span></label>
            {move || {
                let count = rows.get();
                (0..count)
                    .map(|i| roommate_row(form, i, count > 1))
                    .collect_view()
            }}
            <div class="roommate-actions">
                <button class="btn btn-link" on:click=move |_| form.update(FormState::add_roommate)>
                    "+ Add another roommate"
                </button>
                {move || per_person.get().map(|price| view! {
                    <p class="per-person">"Each person pays " <span>{format_usd(price)}</span></p>
                })}
            </div>
        </div>

        {text_input(form, "Residence hall / apartment", "SoVi / North Lake Village", |f| f.building.clone(), |f, v| f.building = v)}
        {text_input(form, "Room or unit", "B-204", |f| f.room.clone(), |f, v| f.room = v)}
    }
}

fn roommate_row(form: RwSignal<FormState>, index: usize, removable: bool) -> impl IntoView {
    let value = move |field: RoommateField| {
        form.with(|f| {
            f.roommates
                .get(index)
                .map(|r| match field {
                    RoommateField::Name => r.name.clone(),
                    RoommateField::Email => r.email.clone(),
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="roommate-row">
            <input
                type="text"
                placeholder="Roommate name"
                prop:value=move || value(RoommateField::Name)
                on:input=move |ev| form.update(|f| f.update_roommate(index, RoommateField::Name, event_target_value(&ev)))
            />
            <input
                type="email"
                placeholder="Roommate email"
                prop:value=move || value(RoommateField::Email)
                on:input=move |ev| form.update(|f| f.update_roommate(index, RoommateField::Email, event_target_value(&ev)))
            />
            <Show when=move || removable>
                <button class="btn btn-icon" on:click=move |_| form.update(|f| f.remove_roommate(index))>
                    "×"
                </button>
            </Show>
        </div>
    }
}

fn select(
    form: RwSignal<FormState>,
    label: &'static str,
    options: &'static [&'static str],
    get: fn(&FormState) -> String,
    set: fn(&mut FormState, String),
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <select on:change=move |ev| form.update(|f| set(f, event_target_value(&ev)))>
                {options
                    .iter()
                    .map(|option| view! {
                        <option value=*option selected=move || form.with(get) == *option>
                            {*option}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

fn schedule_step(form: RwSignal<FormState>) -> impl IntoView {
    view! {
        {select(form, "Preferred day", &DELIVERY_DAYS, |f| f.day.clone(), |f, v| f.day = v)}
        {select(form, "Delivery window", &DELIVERY_WINDOWS, |f| f.window.clone(), |f, v| f.window = v)}
        <div class="preview">
            <p class="eyebrow">"Preview"</p>
            <p>{move || form.with(FormState::summary)}</p>
        </div>
    }
}
