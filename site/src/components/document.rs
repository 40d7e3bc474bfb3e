//! Root document component - the complete HTML page
//!
//! Header, hero, feature grid, walkthrough, download banner and footer,
//! top to bottom, followed by the reveal script.

use super::{DownloadCta, FeaturesSection, Hero, HowItWorksSection, SiteFooter, SiteHeader};
use crate::PageContext;
use crate::content::SITE_NAME;
use crate::motion::{IN_VIEW, NOSCRIPT_CSS};
use crate::script::reveal_script;
use crate::styles::stylesheet;
use leptos::prelude::*;

const DESCRIPTION: &str =
    "Audara is a self-hosted music server that downloads and organizes the songs you want.";

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(ctx: PageContext) -> impl IntoView {
    let title = format!("{SITE_NAME} — Your music, your rules");

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=DESCRIPTION />
                <title>{title}</title>
                <style>{stylesheet()}</style>
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <SiteHeader />
                <main>
                    <Hero />
                    <FeaturesSection />
                    <HowItWorksSection />
                    <DownloadCta />
                </main>
                <SiteFooter year=ctx.year />
                <script>{reveal_script(&IN_VIEW)}</script>
            </body>
        </html>
    }
}
