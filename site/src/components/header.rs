use crate::content::{NAV_LINKS, SITE_NAME};
use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <h1 class="site-title">{SITE_NAME}</h1>
            <nav class="site-nav">
                {NAV_LINKS.iter().map(|link| view! {
                    <a href=link.href>{link.label}</a>
                }).collect_view()}
            </nav>
        </header>
    }
}
