//! Document head metadata: title, description, canonical URL, robots,
//! OpenGraph and Twitter cards.

use std::fmt::Write as _;

use crate::config::SiteConfig;
use crate::html::escape;

const ROLE: &str = "Product / UX Designer";
const DESCRIPTION: &str = "Product / UX Designer focused on thoughtful, human-centered experiences—exploring the intersection of UX and AI.";
const ROBOTS: &str = "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";
const LOCALE: &str = "en_US";

#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub site_name: String,
    pub title: String,
    pub description: String,
    /// Absolute URL of the page (`base_url` + `/`).
    pub canonical_url: String,
    pub favicon: String,
}

impl SiteMeta {
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            site_name: site.name.clone(),
            title: format!("{} — {ROLE}", site.name),
            description: DESCRIPTION.to_string(),
            canonical_url: format!("{}/", site.base_url),
            favicon: "/favicon.ico".to_string(),
        }
    }

    /// Append the `<head>` tags.
    pub fn render_into(&self, out: &mut String) {
        let title = escape(&self.title);
        let description = escape(&self.description);
        let site_name = escape(&self.site_name);
        let canonical = escape(&self.canonical_url);

        let _ = write!(out, "<title>{title}</title>");
        let _ = write!(out, r#"<meta name="description" content="{description}" />"#);
        let _ = write!(out, r#"<meta name="application-name" content="{site_name}" />"#);
        let _ = write!(out, r#"<meta name="author" content="{site_name}" />"#);
        let _ = write!(out, r#"<meta name="creator" content="{site_name}" />"#);
        let _ = write!(out, r#"<meta name="robots" content="{ROBOTS}" />"#);
        let _ = write!(out, r#"<meta name="googlebot" content="{ROBOTS}" />"#);
        let _ = write!(out, r#"<link rel="canonical" href="{canonical}" />"#);

        let _ = write!(out, r#"<meta property="og:type" content="website" />"#);
        let _ = write!(out, r#"<meta property="og:url" content="{canonical}" />"#);
        let _ = write!(out, r#"<meta property="og:title" content="{title}" />"#);
        let _ = write!(out, r#"<meta property="og:description" content="{description}" />"#);
        let _ = write!(out, r#"<meta property="og:site_name" content="{site_name}" />"#);
        let _ = write!(out, r#"<meta property="og:locale" content="{LOCALE}" />"#);

        let _ = write!(out, r#"<meta name="twitter:card" content="summary_large_image" />"#);
        let _ = write!(out, r#"<meta name="twitter:title" content="{title}" />"#);
        let _ = write!(out, r#"<meta name="twitter:description" content="{description}" />"#);

        let favicon = escape(&self.favicon);
        let _ = write!(out, r#"<link rel="icon" href="{favicon}" />"#);
        let _ = write!(out, r#"<link rel="shortcut icon" href="{favicon}" />"#);
    }
}
