//! Page copy and content records.
//!
//! Every list the page repeats over lives here as a fixed-size constant
//! array. Components map these records into uniform cards.

use serde::Serialize;

/// Product name used in the header, document title and footer.
pub const SITE_NAME: &str = "Audara";

/// Route of the download page. Hosted outside this site.
pub const DOWNLOAD_ROUTE: &str = "/download";

/// A navigation link in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Header navigation, left to right.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "How It Works",
        href: "#how-it-works",
    },
    NavLink {
        label: "Download",
        href: DOWNLOAD_ROUTE,
    },
];

/// One primitive of an outline icon, in a 24x24 view box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IconShape {
    Path { d: &'static str },
    Circle { cx: u8, cy: u8, r: u8 },
}

/// Stroked outline graphic drawn with `currentColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub shapes: &'static [IconShape],
}

/// Visual shown above a card's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardMedia {
    Icon(Icon),
    Image {
        src: &'static str,
        alt: &'static str,
    },
}

/// Title, description and media rendered as one uniform card.
///
/// The title doubles as the display key, so it is unique within its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentCard {
    pub title: &'static str,
    pub description: &'static str,
    pub media: CardMedia,
}

impl ContentCard {
    /// Image path, when the card shows an image rather than an icon.
    pub fn image_src(&self) -> Option<&'static str> {
        match self.media {
            CardMedia::Image { src, .. } => Some(src),
            CardMedia::Icon(_) => None,
        }
    }
}

/// Feature grid, in display order.
pub const FEATURES: [ContentCard; 4] = [
    ContentCard {
        title: "Self-Hosted",
        description: "Host your own music server on your hardware, fully private and under your control.",
        media: CardMedia::Icon(Icon {
            shapes: &[IconShape::Path {
                d: "M3 10h18M3 6h18M3 14h18M3 18h18",
            }],
        }),
    },
    ContentCard {
        title: "Automatic Downloads",
        description: "Search and add music; Audara fetches and organizes it automatically.",
        media: CardMedia::Icon(Icon {
            shapes: &[IconShape::Path {
                d: "M12 5v14M19 12l-7 7-7-7",
            }],
        }),
    },
    ContentCard {
        title: "Modern UI",
        description: "Beautiful and easy to use interface for desktop and mobile devices.",
        media: CardMedia::Icon(Icon {
            shapes: &[
                IconShape::Circle {
                    cx: 12,
                    cy: 12,
                    r: 10,
                },
                IconShape::Path { d: "M8 12l2 2 4-4" },
            ],
        }),
    },
    ContentCard {
        title: "Open Source",
        description: "Completely open source — customize and improve however you want.",
        media: CardMedia::Icon(Icon {
            shapes: &[
                IconShape::Path {
                    d: "M12 20v-6M12 4v2",
                },
                IconShape::Circle {
                    cx: 12,
                    cy: 12,
                    r: 10,
                },
            ],
        }),
    },
];

/// "How it works" walkthrough, in display order.
pub const STEPS: [ContentCard; 3] = [
    ContentCard {
        title: "Search and Add",
        description: "Search for any song or artist, and add them to your library.",
        media: CardMedia::Image {
            src: "/images/search-music.png",
            alt: "Search music",
        },
    },
    ContentCard {
        title: "Automatic Download",
        description: "Audara automatically downloads and organizes your music on your server.",
        media: CardMedia::Image {
            src: "/images/auto-download.png",
            alt: "Auto Download",
        },
    },
    ContentCard {
        title: "Stream Anywhere",
        description: "Access your music collection from any device, anytime.",
        media: CardMedia::Image {
            src: "/images/stream-anywhere.png",
            alt: "Stream anywhere",
        },
    },
];

/// Hero copy and preview image.
pub mod hero {
    pub const HEADING: &str = "Your music, your rules.";
    pub const BODY: &str = "Audara is a Spotify-like self-hosted music server that automatically \
         downloads and organizes the songs you want. Take full control of your library.";
    pub const BUTTON: &str = "Get Started";
    pub const PREVIEW_SRC: &str = "/images/audara-app-preview.png";
    pub const PREVIEW_ALT: &str = "Audara app preview";
}

/// Download banner copy.
pub mod cta {
    pub const HEADING: &str = "Ready to take control of your music?";
    pub const BUTTON: &str = "Download Audara Now";
}

/// Copyright line shown in the footer.
pub fn footer_text(year: i32) -> String {
    format!("© {year} {SITE_NAME} — Built with ❤️ by PyzaTech")
}

/// Every image the page references, in document order.
pub fn asset_paths() -> impl Iterator<Item = &'static str> {
    let steps: &'static [ContentCard] = &STEPS;
    std::iter::once(hero::PREVIEW_SRC).chain(steps.iter().filter_map(ContentCard::image_src))
}

/// Serializable snapshot of all page content.
#[derive(Debug, Clone, Serialize)]
pub struct ContentManifest {
    pub site: &'static str,
    pub nav: &'static [NavLink],
    pub features: &'static [ContentCard],
    pub steps: &'static [ContentCard],
    pub assets: Vec<&'static str>,
}

/// Collect the page content into one serializable value.
pub fn manifest() -> ContentManifest {
    ContentManifest {
        site: SITE_NAME,
        nav: &NAV_LINKS,
        features: &FEATURES,
        steps: &STEPS,
        assets: asset_paths().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feature_titles_in_display_order() {
        let titles: Vec<_> = FEATURES.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Self-Hosted", "Automatic Downloads", "Modern UI", "Open Source"]
        );
    }

    #[test]
    fn steps_pair_titles_with_images() {
        let steps: Vec<_> = STEPS
            .iter()
            .map(|c| match c.media {
                CardMedia::Image { src, alt } => (c.title, src, alt),
                CardMedia::Icon(_) => panic!("step {} has no image", c.title),
            })
            .collect();
        assert_eq!(
            steps,
            [
                ("Search and Add", "/images/search-music.png", "Search music"),
                ("Automatic Download", "/images/auto-download.png", "Auto Download"),
                ("Stream Anywhere", "/images/stream-anywhere.png", "Stream anywhere"),
            ]
        );
    }

    #[test]
    fn titles_are_unique_keys() {
        for list in [&FEATURES[..], &STEPS[..]] {
            let keys: HashSet<_> = list.iter().map(|c| c.title).collect();
            assert_eq!(keys.len(), list.len());
        }
    }

    #[test]
    fn nav_targets() {
        let links: Vec<_> = NAV_LINKS.iter().map(|l| (l.label, l.href)).collect();
        assert_eq!(
            links,
            [
                ("Features", "#features"),
                ("How It Works", "#how-it-works"),
                ("Download", "/download"),
            ]
        );
    }

    #[test]
    fn footer_interpolates_year() {
        assert_eq!(footer_text(2026), "© 2026 Audara — Built with ❤️ by PyzaTech");
    }

    #[test]
    fn asset_paths_cover_hero_and_steps() {
        let assets: Vec<_> = asset_paths().collect();
        assert_eq!(
            assets,
            [
                "/images/audara-app-preview.png",
                "/images/search-music.png",
                "/images/auto-download.png",
                "/images/stream-anywhere.png",
            ]
        );
    }

    #[test]
    fn manifest_serializes_media_tags() {
        let json = serde_json::to_value(manifest()).unwrap();
        assert_eq!(json["features"][0]["media"]["type"], "icon");
        assert_eq!(json["features"][2]["media"]["shapes"][0]["kind"], "circle");
        assert_eq!(json["steps"][1]["media"]["type"], "image");
        assert_eq!(json["steps"][1]["media"]["alt"], "Auto Download");
        assert_eq!(json["assets"].as_array().map(Vec::len), Some(4));
    }
}
