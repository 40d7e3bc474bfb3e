//! Viewport-revealed section wrapper.

use crate::motion::IN_VIEW;
use leptos::prelude::*;

/// Section that starts hidden and is revealed by the reveal script.
///
/// Descendants with the `motion-item` class animate in with their own
/// stagger delay once the section flips to `visible`.
#[component]
pub fn MotionSection(
    id: &'static str,
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=class
            data-motion="container"
            data-motion-state="hidden"
            data-motion-amount=IN_VIEW.amount.to_string()
        >
            {children()}
        </section>
    }
}
