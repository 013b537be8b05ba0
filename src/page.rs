//! Page composition — heading, location badge and carousel inside the page
//! frame, wrapped in a full HTML document.
//!
//! The document never changes while the process runs, so it is rendered
//! once ([`RenderedPage`]) and every request is served from that copy.

use std::fmt::Write as _;

use sha2::{Digest, Sha256};

use crate::cards::CardDescriptor;
use crate::carousel::{Carousel, PeekOnMount};
use crate::config::SiteConfig;
use crate::content;
use crate::error::AppError;
use crate::html::escape;
use crate::icons::Icon;
use crate::metadata::SiteMeta;

/// Stylesheet, compiled in so the page is styled even without a static dir.
pub const STYLESHEET: &str = include_str!("../assets/site.css");

/// Path the stylesheet is served from.
pub const STYLESHEET_PATH: &str = "/site.css";

const HEADING_LINES: [&str; 2] = ["Design should be built", "for changing skies."];
const LOCATION: &str = "Vigo, Spain";

#[derive(Debug, Clone)]
pub struct Page {
    meta: SiteMeta,
    carousel: Carousel,
}

impl Page {
    /// Compose the portfolio page from the built-in card list.
    pub fn compose(site: &SiteConfig) -> Result<Self, AppError> {
        Self::with_cards(site, content::portfolio_cards().to_vec())
    }

    /// Compose a page around an arbitrary card list.
    pub fn with_cards(site: &SiteConfig, cards: Vec<CardDescriptor>) -> Result<Self, AppError> {
        Ok(Self { meta: SiteMeta::from_site(site), carousel: Carousel::new(cards)? })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Render the complete HTML document.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32 * 1024);
        out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>");
        out.push_str(r#"<meta charset="utf-8" />"#);
        out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1" />"#);
        self.meta.render_into(&mut out);
        let _ = write!(out, r#"<link rel="stylesheet" href="{STYLESHEET_PATH}" />"#);
        out.push_str("</head>\n<body>");

        out.push_str(r#"<main class="page"><div class="page__frame">"#);
        render_hero(&mut out);
        out.push_str(r#"<section class="page__carousel">"#);
        out.push_str(&self.carousel.render());
        out.push_str("</section>");
        out.push_str("</div></main>");

        PeekOnMount::render_into(&mut out);
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn render_hero(out: &mut String) {
    out.push_str(r#"<section class="hero"><div class="hero__heading"><h1>"#);
    for line in HEADING_LINES {
        let _ = write!(out, r#"<span class="hero__line">{}</span>"#, escape(line));
    }
    out.push_str("</h1></div>");

    out.push_str(r#"<div class="hero__aside"><div class="pill pill--glass location">"#);
    out.push_str(r#"<span class="pill__label location__label">"#);
    Icon::Sun.render_into(out, "sm");
    out.push_str(&escape(LOCATION));
    out.push_str("</span></div></div></section>");
}

// ── RenderedPage ──────────────────────────────────────────────────────────────

/// A rendered document plus its strong validator.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    /// Quoted ETag value: `"` + sha256 hex + `"`.
    pub etag: String,
}

impl RenderedPage {
    pub fn new(page: &Page) -> Self {
        let html = page.render();
        let etag = format!("\"{}\"", hex::encode(Sha256::digest(html.as_bytes())));
        Self { html, etag }
    }

    /// `true` if an `If-None-Match` header value matches this page.
    pub fn matches(&self, if_none_match: &str) -> bool {
        if_none_match
            .split(',')
            .map(|tag| tag.trim().trim_start_matches("W/"))
            .any(|tag| tag == "*" || tag == self.etag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::compose(&SiteConfig::local()).unwrap()
    }

    #[test]
    fn document_structure() {
        let html = page().render();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="/site.css" />"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn hero_precedes_carousel() {
        let html = page().render();
        let heading = html.find("Design should be built").unwrap();
        let badge = html.find("Vigo, Spain").unwrap();
        let strip = html.find("data-carousel").unwrap();
        assert!(heading < badge && badge < strip);
        assert!(html.contains("for changing skies."));
    }

    #[test]
    fn hook_script_follows_the_strip() {
        let html = page().render();
        assert!(html.find("data-carousel").unwrap() < html.find("<script>").unwrap());
        assert_eq!(html.matches("<script>").count(), 1);
    }

    #[test]
    fn glyphs_are_embedded_not_fetched() {
        let html = page().render();
        for name in [
            "sun",
            "check-badge",
            "user",
            "cursor-arrow-rays",
            "chat-bubble-left-right",
            "envelope",
            "book-open",
        ] {
            assert!(!html.contains(&format!("/icons/{name}.svg")), "{name}");
        }
        // Sun badge, profile (check badge, three capabilities, envelope), read-more.
        assert!(html.matches(r#"<svg class="icon "#).count() >= 7);
    }

    #[test]
    fn composed_page_uses_portfolio_cards() {
        assert_eq!(page().carousel().cards(), content::portfolio_cards());
    }

    #[test]
    fn etag_is_stable_and_quoted() {
        let a = RenderedPage::new(&page());
        let b = RenderedPage::new(&page());
        assert_eq!(a.etag, b.etag);
        assert!(a.etag.starts_with('"') && a.etag.ends_with('"'));
        assert_eq!(a.etag.len(), 64 + 2);
    }

    #[test]
    fn if_none_match_handling() {
        let rendered = RenderedPage::new(&page());
        assert!(rendered.matches(&rendered.etag));
        assert!(rendered.matches(&format!("\"other\", W/{}", rendered.etag)));
        assert!(rendered.matches("*"));
        assert!(!rendered.matches("\"stale\""));
    }
}
