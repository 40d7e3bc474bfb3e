use super::{ContentCardView, MotionSection, TitleLevel};
use crate::content::STEPS;
use crate::motion::STEP_CARD;
use leptos::prelude::*;

/// Three-step walkthrough; a row on wide screens, stacked otherwise.
#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <MotionSection id="how-it-works" class="section how-it-works">
            <h3 class="section-title">"How It Works"</h3>
            <div class="step-row">
                {STEPS.iter().enumerate().map(|(index, card)| view! {
                    <ContentCardView
                        card=*card
                        index=index
                        gesture=STEP_CARD
                        class="step-card"
                        level=TitleLevel::H5
                    />
                }).collect_view()}
            </div>
        </MotionSection>
    }
}
