use super::{ContentCardView, MotionSection};
use crate::content::FEATURES;
use crate::motion::FEATURE_CARD;
use leptos::prelude::*;

/// Feature grid, revealed card by card.
#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <MotionSection id="features" class="section features">
            <h3 class="section-title">"Features"</h3>
            <div class="feature-grid">
                {FEATURES.iter().enumerate().map(|(index, card)| view! {
                    <ContentCardView
                        card=*card
                        index=index
                        gesture=FEATURE_CARD
                        class="feature-card"
                    />
                }).collect_view()}
            </div>
        </MotionSection>
    }
}
