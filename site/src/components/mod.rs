//! Leptos UI components for the landing page.
//!
//! Each component is a Leptos `#[component]` function rendered server side
//! by [`crate::render_page`].
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── SiteHeader
//! ├── Hero                    (slide-in columns)
//! ├── FeaturesSection         (MotionSection)
//! │   └── ContentCardView × 4 (CardMediaView → IconView)
//! ├── HowItWorksSection       (MotionSection)
//! │   └── ContentCardView × 3 (CardMediaView → img)
//! ├── DownloadCta
//! └── SiteFooter
//! ```

mod card;
mod cta;
mod document;
mod features;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod icons;
mod motion;

pub use card::{CardMediaView, ContentCardView, TitleLevel};
pub use cta::DownloadCta;
pub use document::LandingDocument;
pub use features::FeaturesSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::Hero;
pub use how_it_works::HowItWorksSection;
pub use icons::IconView;
pub use motion::MotionSection;
