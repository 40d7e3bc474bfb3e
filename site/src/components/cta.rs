use crate::content::{DOWNLOAD_ROUTE, cta};
use crate::motion::CTA_BUTTON;
use leptos::prelude::*;

#[component]
pub fn DownloadCta() -> impl IntoView {
    let button_class = format!("button button-dark gesture {}", CTA_BUTTON.class);

    view! {
        <section id="download" class="cta">
            <h4 class="cta-title">{cta::HEADING}</h4>
            <a href=DOWNLOAD_ROUTE class=button_class>{cta::BUTTON}</a>
        </section>
    }
}
