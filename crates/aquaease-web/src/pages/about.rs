//! About Page

use leptos::prelude::*;

use crate::components::CardGrid;
use crate::content::{ABOUT_PARAGRAPHS, BENEFITS, STEPS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page about">
            <div>
                <p class="eyebrow">"About Us"</p>
                <h1>"A student-built answer to campus hydration"</h1>
                {ABOUT_PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                <CardGrid cards=&BENEFITS class="highlight" />
            </div>
            <aside>
                <div class="card">
                    <p class="eyebrow">"How it works"</p>
                    {STEPS
                        .iter()
                        .map(|(number, title, body)| view! {
                            <div class="how-step">
                                <p class="step-number">{*number}</p>
                                <div>
                                    <p class="step-title">{*title}</p>
                                    <p>{*body}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="card">
                    <p class="eyebrow">"Our Founder"</p>
                    <p class="step-title">"Evan Goldberg"</p>
                    <p>"Class of 2029"</p>
                    <p>
                        "Evan Goldberg created AquaEase after seeing how difficult it was for students to "
                        "access reliable water delivery on campus. As a student-focused entrepreneur, he "
                        "built AquaEase to make hydration more convenient, affordable, and accessible for "
                        "college communities."
                    </p>
                </div>
            </aside>
        </section>
    }
}
