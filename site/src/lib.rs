//! # audara-site
//!
//! Leptos SSR renderer for the Audara landing page.
//!
//! The page is a pure function of a [`PageContext`] (today: the footer year).
//! Content lives in constant, ordered lists of [`content::ContentCard`]
//! records; components map each list into uniform cards and tag them with
//! declarative animation presets from [`motion`].
//!
//! ## Quick Start
//!
//! ```rust
//! use audara_site::{render_page, PageContext};
//!
//! let html = render_page(&PageContext::for_year(2026));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2026 Audara"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - page copy and content records
//! - [`motion`] - animation presets, spring model, generated CSS
//! - [`components`] - Leptos UI components
//! - [`styles`] - layout CSS
//! - [`script`] - inline viewport reveal script
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <LandingDocument ctx=ctx /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed. Animations run in the browser
//! from CSS plus one small inline script.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
#[allow(missing_docs)]
pub mod content;
#[allow(missing_docs)]
pub mod motion;
pub mod script;
pub mod styles;

use chrono::Datelike;
use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Ambient values read once at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    /// Calendar year shown in the footer.
    pub year: i32,
}

impl PageContext {
    /// Context for the local calendar date right now.
    pub fn now() -> Self {
        Self::for_year(chrono::Local::now().year())
    }

    /// Context pinned to a specific year.
    pub fn for_year(year: i32) -> Self {
        PageContext { year }
    }
}

/// Render the complete landing page.
///
/// Returns a full HTML document including `<!DOCTYPE html>`. Rendering is
/// deterministic: the same context always yields the same bytes.
///
/// # Example
///
/// ```rust
/// use audara_site::{render_page, PageContext};
///
/// let html = render_page(&PageContext::for_year(2030));
/// assert!(html.contains("id=\"features\""));
/// ```
pub fn render_page(ctx: &PageContext) -> String {
    let doc = view! { <LandingDocument ctx=*ctx /> };

    let html = doc.to_html();
    tracing::debug!(year = ctx.year, bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
