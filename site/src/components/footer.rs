use crate::content::footer_text;
use leptos::prelude::*;

#[component]
pub fn SiteFooter(year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer">{footer_text(year)}</footer>
    }
}
