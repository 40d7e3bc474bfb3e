//! Inline SVG outline icons for the feature cards.

use crate::content::{Icon, IconShape};
use leptos::prelude::*;

/// Renders a stroked 24x24 outline icon from its shapes.
///
/// # Example
///
/// ```rust,ignore
/// let icon = Icon { shapes: &[IconShape::Path { d: "M12 5v14" }] };
/// view! { <IconView icon=icon /> }
/// ```
#[component]
pub fn IconView(
    /// Shapes to draw, in paint order
    icon: Icon,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            {icon.shapes.iter().map(|shape| match *shape {
                IconShape::Path { d } => view! { <path d=d></path> }.into_any(),
                IconShape::Circle { cx, cy, r } => view! {
                    <circle cx=cx.to_string() cy=cy.to_string() r=r.to_string()></circle>
                }.into_any(),
            }).collect_view()}
        </svg>
    }
}
