//! Subscribe Page

use leptos::prelude::*;

use aquaease_core::{JugCount, SubscriptionPlan, Term};

use crate::components::{CardGrid, PlanBuilder};
use crate::content::SUBSCRIBE_HIGHLIGHTS;

fn term_blurb(term: Term) -> &'static str {
    match term {
        Term::FullYear => "This subscription is for the whole school year. The cost of this subscription can be divided between roommates.",
        Term::Semester => "This subscription is for one semester. The cost of this subscription can be divided between roommates.",
    }
}

#[component]
pub fn SubscribePage() -> impl IntoView {
    view! {
        <section class="page">
            <p class="eyebrow">"Subscribe"</p>
            <h1>"Choose a subscription"</h1>
            <p class="lead">
                "Subscriptions are available for one semester or the full school year. "
                "Choose a monthly jug plan that fits your hydration routine."
            </p>

            <div class="pricing">
                {[Term::FullYear, Term::Semester]
                    .into_iter()
                    .map(|term| view! {
                        <div class="pricing-card">
                            <p class="eyebrow">{term.long_label()}</p>
                            <p>{term_blurb(term)}</p>
                            <p>"There are three different types of plans."</p>
                            {JugCount::ALL
                                .into_iter()
                                .map(|jugs| {
                                    let plan = SubscriptionPlan::new(term, jugs);
                                    view! {
                                        <a class="plan-link" href=plan.subscribe_href()>
                                            <div>
                                                <p class="tier">{jugs.tier()}</p>
                                                <p class="detail">{format!("{jugs} jugs/month")}</p>
                                            </div>
                                            <span class="price">{plan.display_price_label()}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="page builder-section">
            <div>
                <p class="eyebrow">"Delivery details"</p>
                <h2>"Build your AquaEase plan"</h2>
                <p>
                    "Tell us where you live, choose 2, 3, or 4 water jugs, and share your ideal "
                    "delivery window. We will confirm pricing and get you set up."
                </p>
                <CardGrid cards=&SUBSCRIBE_HIGHLIGHTS />
            </div>
            <PlanBuilder />
        </section>
    }
}
