//! Card descriptors — the data behind each carousel card.
//!
//! A [`CardDescriptor`] says *what* a card shows; [`render::render_card`]
//! decides *how*. Descriptors serialize with camelCase keys (`imageSrc`,
//! `projectType`) so the JSON served at `/api/cards` reads like the page's
//! own data.
//!
//! Per-card destinations (project links, article tiles, profile details) are
//! plain data on the descriptor. The renderer never branches on `id`.

pub mod render;

pub use render::render_card;

use serde::{Deserialize, Serialize};

use crate::icons::ExploreIcon;

// ── CardKind ──────────────────────────────────────────────────────────────────

/// Which visual variant a descriptor renders as.
///
/// Any tag other than `project`, `profile` or `articles` is kept verbatim in
/// [`CardKind::Unknown`] and renders as the placeholder card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardKind {
    Project,
    Profile,
    Articles,
    Unknown(String),
}

impl CardKind {
    pub fn as_str(&self) -> &str {
        match self {
            CardKind::Project => "project",
            CardKind::Profile => "profile",
            CardKind::Articles => "articles",
            CardKind::Unknown(tag) => tag,
        }
    }
}

impl From<String> for CardKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "project" => CardKind::Project,
            "profile" => CardKind::Profile,
            "articles" => CardKind::Articles,
            _ => CardKind::Unknown(tag),
        }
    }
}

impl From<&str> for CardKind {
    fn from(tag: &str) -> Self {
        CardKind::from(tag.to_string())
    }
}

impl From<CardKind> for String {
    fn from(kind: CardKind) -> Self {
        match kind {
            CardKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

// ── ProjectType ───────────────────────────────────────────────────────────────

/// Discipline badge pinned to a project image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "UX/UI")]
    UxUi,
    #[serde(rename = "CX")]
    Cx,
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::UxUi => "UX/UI",
            ProjectType::Cx => "CX",
        }
    }
}

// ── RichText ──────────────────────────────────────────────────────────────────

/// One run of text, optionally emphasized (rendered semibold).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strong: bool,
}

/// Inline rich text: an ordered list of plain and emphasized spans.
///
/// Deserializes from either a plain string or a list of spans.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RichTextRepr")]
pub struct RichText(pub Vec<Span>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RichTextRepr {
    Plain(String),
    Spans(Vec<Span>),
}

impl From<RichTextRepr> for RichText {
    fn from(repr: RichTextRepr) -> Self {
        match repr {
            RichTextRepr::Plain(text) => RichText::new().plain(text),
            RichTextRepr::Spans(spans) => RichText(spans),
        }
    }
}

impl RichText {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.0.push(Span { text: text.into(), strong: false });
        self
    }

    pub fn strong(mut self, text: impl Into<String>) -> Self {
        self.0.push(Span { text: text.into(), strong: true });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|s| s.text.is_empty())
    }

    /// Text with emphasis dropped, for alt text and logs.
    pub fn to_plain(&self) -> String {
        self.0.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::new().plain(text)
    }
}

// ── Per-kind payloads ─────────────────────────────────────────────────────────

/// Destinations of a project card's two call-to-action affordances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLinks {
    /// "Read Full Story" — the written case study.
    pub story_url: String,
    /// "Explore project" — design file or live prototype.
    pub explore_url: String,
    #[serde(default)]
    pub explore_icon: ExploreIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub tagline: RichText,
    pub background_src: String,
    /// Address the "Get in touch" button opens a composer for.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleTile {
    pub title: String,
    pub url: String,
    pub thumbnail_src: String,
    /// Icon of the publishing platform, drawn as a mask.
    pub platform_icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFeed {
    /// Only the first [`render::ARTICLE_TILES`] tiles are shown.
    pub tiles: Vec<ArticleTile>,
    /// Target of the trailing "Read more" link.
    pub more_url: String,
}

// ── CardDescriptor ────────────────────────────────────────────────────────────

/// Content and kind of one carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDescriptor {
    pub id: String,
    pub kind: CardKind,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
    /// Profile details; the site owner's built-in profile when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// Article tiles; the built-in curated feed when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles: Option<ArticleFeed>,
}

impl CardDescriptor {
    pub fn new(id: impl Into<String>, kind: impl Into<CardKind>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            title: title.into(),
            subtitle: None,
            image_src: None,
            project_type: None,
            links: None,
            profile: None,
            articles: None,
        }
    }

    pub fn project(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, CardKind::Project, title)
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<RichText>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image_src = Some(src.into());
        self
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn with_links(mut self, links: ProjectLinks) -> Self {
        self.links = Some(links);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_articles(mut self, feed: ArticleFeed) -> Self {
        self.articles = Some(feed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_keeps_its_tag() {
        let kind = CardKind::from("video");
        assert_eq!(kind, CardKind::Unknown("video".into()));
        assert_eq!(kind.as_str(), "video");
    }

    #[test]
    fn descriptor_deserializes_camel_case() {
        let d: CardDescriptor = serde_json::from_str(
            r#"{"id":"p1","kind":"project","imageSrc":"/a.png","projectType":"UX/UI"}"#,
        )
        .unwrap();
        assert_eq!(d.kind, CardKind::Project);
        assert_eq!(d.image_src.as_deref(), Some("/a.png"));
        assert_eq!(d.project_type, Some(ProjectType::UxUi));
        assert!(d.title.is_empty());
    }

    #[test]
    fn subtitle_accepts_plain_string_or_spans() {
        let plain: CardDescriptor =
            serde_json::from_str(r#"{"id":"a","kind":"project","subtitle":"hello"}"#).unwrap();
        assert_eq!(plain.subtitle, Some(RichText::from("hello")));

        let spans: CardDescriptor = serde_json::from_str(
            r#"{"id":"a","kind":"project","subtitle":[{"text":"Lume","strong":true},{"text":" lacked"}]}"#,
        )
        .unwrap();
        let subtitle = spans.subtitle.unwrap();
        assert!(subtitle.0[0].strong);
        assert!(!subtitle.0[1].strong);
        assert_eq!(subtitle.to_plain(), "Lume lacked");
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let json = serde_json::to_value(CardDescriptor::new("x", "unknown", "")).unwrap();
        assert_eq!(json["kind"], "unknown");
        assert!(json.get("imageSrc").is_none());
        assert!(json.get("links").is_none());
    }

    #[test]
    fn project_type_labels() {
        assert_eq!(ProjectType::UxUi.label(), "UX/UI");
        assert_eq!(serde_json::to_string(&ProjectType::Cx).unwrap(), "\"CX\"");
    }

    #[test]
    fn rich_text_emptiness() {
        assert!(RichText::new().is_empty());
        assert!(RichText::from("").is_empty());
        assert!(!RichText::new().strong("x").is_empty());
    }
}
