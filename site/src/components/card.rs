//! Uniform card rendered from a [`ContentCard`] record.

use super::IconView;
use crate::content::{CardMedia, ContentCard};
use crate::motion::{Gesture, item_style};
use leptos::prelude::*;

/// Heading level of a card title; feature cards sit one level above steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleLevel {
    H4,
    H5,
}

/// One staggered motion item showing media, title and description.
#[component]
pub fn ContentCardView(
    card: ContentCard,
    /// Position within the parent container, drives the stagger delay
    index: usize,
    gesture: Gesture,
    /// Extra layout class for the card element
    class: &'static str,
    #[prop(default = TitleLevel::H4)] level: TitleLevel,
) -> impl IntoView {
    let class = format!("{class} motion-item gesture {}", gesture.class);
    let title = match level {
        TitleLevel::H4 => view! { <h4 class="card-title">{card.title}</h4> }.into_any(),
        TitleLevel::H5 => view! { <h5 class="card-title">{card.title}</h5> }.into_any(),
    };

    view! {
        <div class=class style=item_style(index) data-key=card.title>
            <CardMediaView media=card.media />
            {title}
            <p class="card-description">{card.description}</p>
        </div>
    }
}

/// Icon or image above a card title.
#[component]
pub fn CardMediaView(media: CardMedia) -> impl IntoView {
    match media {
        CardMedia::Icon(icon) => view! {
            <div class="feature-icon">
                <IconView icon=icon />
            </div>
        }
        .into_any(),
        CardMedia::Image { src, alt } => view! { <img src=src alt=alt loading="lazy" /> }.into_any(),
    }
}
