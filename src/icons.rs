//! Icon glyphs referenced by the cards.
//!
//! UI glyphs are compiled into the binary from `assets/icons/` and inlined as
//! `<svg fill="currentColor">`, so they pick up the surrounding text colour
//! and never depend on the static directory. Brand icons keep their own
//! colours and are plain `<img>` elements served from `/icons/` in the static
//! directory.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    CheckBadge,
    User,
    CursorArrowRays,
    ChatBubbleLeftRight,
    Envelope,
    BookOpen,
    Notion,
    Figma,
    V0,
}

/// Where an icon's markup comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    /// Embedded SVG document.
    Glyph(&'static str),
    /// Path under the static root.
    Brand(&'static str),
}

impl Icon {
    pub fn source(self) -> IconSource {
        match self {
            Icon::Sun => IconSource::Glyph(include_str!("../assets/icons/sun.svg")),
            Icon::CheckBadge => IconSource::Glyph(include_str!("../assets/icons/check-badge.svg")),
            Icon::User => IconSource::Glyph(include_str!("../assets/icons/user.svg")),
            Icon::CursorArrowRays => {
                IconSource::Glyph(include_str!("../assets/icons/cursor-arrow-rays.svg"))
            }
            Icon::ChatBubbleLeftRight => {
                IconSource::Glyph(include_str!("../assets/icons/chat-bubble-left-right.svg"))
            }
            Icon::Envelope => IconSource::Glyph(include_str!("../assets/icons/envelope.svg")),
            Icon::BookOpen => IconSource::Glyph(include_str!("../assets/icons/book-open.svg")),
            Icon::Notion => IconSource::Brand("/icons/Notion_icon.svg"),
            Icon::Figma => IconSource::Brand("/icons/Figma_icon.svg"),
            Icon::V0 => IconSource::Brand("/icons/v0_icon.svg"),
        }
    }

    /// Append the icon markup to `out`. `size` is one of the `icon--*`
    /// modifiers defined in the stylesheet (`sm`, `md`, `lg`).
    pub fn render_into(self, out: &mut String, size: &str) {
        match self.source() {
            IconSource::Brand(src) => {
                let _ = write!(
                    out,
                    r#"<img class="icon icon--{size}" src="{src}" alt="" draggable="false" />"#
                );
            }
            IconSource::Glyph(svg) => render_glyph(out, svg, size),
        }
    }
}

/// Inline an embedded SVG document, tagging its root element with the icon
/// classes. The files carry no XML prolog, so the document starts at `<svg`.
fn render_glyph(out: &mut String, svg: &str, size: &str) {
    let svg = svg.trim();
    let attrs = svg.strip_prefix("<svg").unwrap_or(svg);
    let _ = write!(
        out,
        r#"<svg class="icon icon--{size}" aria-hidden="true" focusable="false"{attrs}"#
    );
}

/// Mask-drawn glyph for an arbitrary icon path (article platform icons come
/// from descriptor data rather than the [`Icon`] set).
pub fn render_mask(out: &mut String, src: &str, size: &str) {
    let _ = write!(
        out,
        r#"<span class="icon icon--mask icon--{size}" style="--icon: url('{}')" aria-hidden="true"></span>"#,
        crate::html::escape(src)
    );
}

/// Icon shown on a project's "Explore project" affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExploreIcon {
    #[default]
    Figma,
    V0,
}

impl From<ExploreIcon> for Icon {
    fn from(icon: ExploreIcon) -> Self {
        match icon {
            ExploreIcon::Figma => Icon::Figma,
            ExploreIcon::V0 => Icon::V0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_icons_render_as_images() {
        let mut out = String::new();
        Icon::Notion.render_into(&mut out, "md");
        assert!(out.starts_with("<img"));
        assert!(out.contains("/icons/Notion_icon.svg"));
    }

    #[test]
    fn glyphs_render_inline_svg() {
        let mut out = String::new();
        Icon::Sun.render_into(&mut out, "sm");
        assert!(out.starts_with(r#"<svg class="icon icon--sm" aria-hidden="true""#));
        assert!(out.contains(r#"viewBox="0 0 24 24""#));
        assert!(out.contains("<path"));
        assert!(out.ends_with("</svg>"));
        assert!(!out.contains("/icons/"));
    }

    #[test]
    fn every_glyph_is_embedded() {
        let glyphs = [
            Icon::Sun,
            Icon::CheckBadge,
            Icon::User,
            Icon::CursorArrowRays,
            Icon::ChatBubbleLeftRight,
            Icon::Envelope,
            Icon::BookOpen,
        ];
        for icon in glyphs {
            let IconSource::Glyph(svg) = icon.source() else {
                panic!("{icon:?} is not embedded");
            };
            assert!(svg.trim_start().starts_with("<svg"), "{icon:?}");
            assert!(svg.contains(r#"fill="currentColor""#), "{icon:?}");
        }
    }

    #[test]
    fn article_platform_icons_stay_masks() {
        let mut out = String::new();
        render_mask(&mut out, "/icons/Medium_icon.svg", "sm");
        assert!(out.contains("icon--mask"));
        assert!(out.contains("url('/icons/Medium_icon.svg')"));
    }

    #[test]
    fn explore_icon_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ExploreIcon::V0).unwrap(), "\"v0\"");
        let icon: ExploreIcon = serde_json::from_str("\"figma\"").unwrap();
        assert_eq!(Icon::from(icon), Icon::Figma);
    }
}
