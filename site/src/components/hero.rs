use crate::content::{DOWNLOAD_ROUTE, hero};
use crate::motion::HERO_BUTTON;
use leptos::prelude::*;

/// Two-column hero: copy slides in from the left, preview from the right.
#[component]
pub fn Hero() -> impl IntoView {
    let button_class = format!("button button-primary gesture {}", HERO_BUTTON.class);

    view! {
        <section class="hero">
            <div class="hero-copy motion-slide-left">
                <h2 class="hero-title">{hero::HEADING}</h2>
                <p class="hero-body">{hero::BODY}</p>
                <a href=DOWNLOAD_ROUTE class=button_class>{hero::BUTTON}</a>
            </div>
            <div class="hero-preview motion-slide-right">
                <img src=hero::PREVIEW_SRC alt=hero::PREVIEW_ALT />
            </div>
        </section>
    }
}
