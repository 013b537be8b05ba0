//! Card rendering — one descriptor in, one `<article>` out.
//!
//! [`render_card`] dispatches on [`CardKind`]:
//!
//! | kind        | variant                                                  |
//! |-------------|----------------------------------------------------------|
//! | `project`   | image, type badge, 4-line description, two CTAs          |
//! | `profile`   | background photo, fade, name, tagline, capabilities, CTA |
//! | `articles`  | three article tiles and a "Read more" link, no chrome    |
//! | anything else | empty glass placeholder                                |
//!
//! A project without an image also gets the placeholder. Rendering never
//! fails; other missing fields drop the region they would fill.

use std::fmt::Write as _;

use crate::content;
use crate::html::{escape, EXTERNAL_LINK_ATTRS};
use crate::icons::{self, Icon};

use super::{ArticleFeed, CardDescriptor, CardKind, Profile, ProjectLinks, ProjectType, RichText};

/// Number of article tiles the articles card shows.
pub const ARTICLE_TILES: usize = 3;

/// A profile capability: icon plus a two-line label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub icon: Icon,
    pub lines: [&'static str; 2],
}

/// Profile capabilities, always in this order.
pub const CAPABILITIES: [Capability; 3] = [
    Capability { icon: Icon::User, lines: ["User", "Experience"] },
    Capability { icon: Icon::CursorArrowRays, lines: ["User", "Interface"] },
    Capability { icon: Icon::ChatBubbleLeftRight, lines: ["Conversational", "Experience"] },
];

/// Render one card.
pub fn render_card(card: &CardDescriptor) -> String {
    let mut out = String::with_capacity(2048);
    match card.kind {
        CardKind::Project => match card.image_src.as_deref() {
            Some(image_src) => render_project(&mut out, card, image_src),
            None => render_placeholder(&mut out, card),
        },
        CardKind::Profile => {
            let profile = card.profile.as_ref().unwrap_or_else(|| content::owner_profile());
            render_profile(&mut out, profile);
        }
        CardKind::Articles => {
            let feed = card.articles.as_ref().unwrap_or_else(|| content::curated_articles());
            render_articles(&mut out, feed);
        }
        CardKind::Unknown(_) => render_placeholder(&mut out, card),
    }
    out
}

// ── Placeholder ───────────────────────────────────────────────────────────────

fn render_placeholder(out: &mut String, card: &CardDescriptor) {
    let _ = write!(
        out,
        r#"<article class="card card--glass card--placeholder" data-kind="placeholder" aria-label="{}">"#,
        escape(&card.title)
    );
    out.push_str(r#"<div class="card__tint" aria-hidden="true"></div>"#);
    out.push_str(r#"<div class="card__body"></div>"#);
    out.push_str("</article>");
}

// ── Project ───────────────────────────────────────────────────────────────────

fn render_project(out: &mut String, card: &CardDescriptor, image_src: &str) {
    let _ = write!(
        out,
        r#"<article class="card card--glass card--hover card--project" data-kind="project" aria-label="{}">"#,
        escape(&card.title)
    );
    out.push_str(r#"<div class="card__tint" aria-hidden="true"></div>"#);
    out.push_str(r#"<div class="card__body project">"#);

    out.push_str(r#"<div class="project__media">"#);
    let _ = write!(
        out,
        r#"<img class="project__image" src="{}" alt="{}" draggable="false" />"#,
        escape(image_src),
        escape(&card.title)
    );
    if let Some(project_type) = card.project_type {
        render_badge(out, project_type);
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="project__text"><p class="project__description clamp-4">"#);
    if let Some(subtitle) = &card.subtitle {
        render_rich_text(out, subtitle);
    }
    out.push_str("</p></div>");

    out.push_str(r#"<div class="project__actions">"#);
    render_project_actions(out, card.links.as_ref());
    out.push_str("</div>");

    out.push_str("</div></article>");
}

fn render_badge(out: &mut String, project_type: ProjectType) {
    let _ = write!(
        out,
        r#"<span class="pill pill--glass project__badge"><span class="pill__label">{}</span></span>"#,
        project_type.label()
    );
}

/// Both CTAs. Without links they render as inert buttons so the card keeps
/// its shape.
fn render_project_actions(out: &mut String, links: Option<&ProjectLinks>) {
    match links {
        Some(links) => {
            render_action_link(out, &links.story_url, Icon::Notion, "Read Full Story");
            render_action_link(out, &links.explore_url, links.explore_icon.into(), "Explore project");
        }
        None => {
            render_action_button(out, Icon::Notion, "Read Full Story");
            render_action_button(out, Icon::Figma, "Explore project");
        }
    }
}

fn render_action_link(out: &mut String, href: &str, icon: Icon, label: &str) {
    let _ = write!(out, r#"<a class="action" href="{}" {EXTERNAL_LINK_ATTRS}>"#, escape(href));
    icon.render_into(out, "md");
    let _ = write!(out, r#"<span class="action__label">{label}</span></a>"#);
}

fn render_action_button(out: &mut String, icon: Icon, label: &str) {
    out.push_str(r#"<button type="button" class="action action--disabled" disabled aria-disabled="true">"#);
    icon.render_into(out, "md");
    let _ = write!(out, r#"<span class="action__label">{label}</span></button>"#);
}

fn render_rich_text(out: &mut String, text: &RichText) {
    for span in &text.0 {
        if span.strong {
            let _ = write!(out, r#"<span class="text-strong">{}</span>"#, escape(&span.text));
        } else {
            out.push_str(&escape(&span.text));
        }
    }
}

// ── Profile ───────────────────────────────────────────────────────────────────

fn render_profile(out: &mut String, profile: &Profile) {
    out.push_str(r#"<article class="card card--hover card--profile" data-kind="profile">"#);
    let _ = write!(
        out,
        r#"<div class="profile__image" style="background-image: url('{}')" aria-hidden="true"></div>"#,
        escape(&profile.background_src)
    );
    out.push_str(r#"<div class="profile__fade" aria-hidden="true"></div>"#);
    out.push_str(r#"<div class="profile__content"><div class="profile__inner">"#);

    out.push_str(r#"<div class="profile__heading"><div class="profile__name-row">"#);
    let _ = write!(out, r#"<h2 class="profile__name">{}</h2>"#, escape(&profile.name));
    Icon::CheckBadge.render_into(out, "md");
    out.push_str(r#"</div><p class="profile__tagline">"#);
    render_rich_text(out, &profile.tagline);
    out.push_str("</p></div>");

    out.push_str(r#"<ul class="capabilities">"#);
    for (i, capability) in CAPABILITIES.iter().enumerate() {
        let class = if i == 1 { "capability capability--divided" } else { "capability" };
        let _ = write!(out, r#"<li class="{class}">"#);
        capability.icon.render_into(out, "md");
        let _ = write!(
            out,
            r#"<span class="capability__label">{}<br />{}</span></li>"#,
            capability.lines[0], capability.lines[1]
        );
    }
    out.push_str("</ul>");

    let _ = write!(
        out,
        r#"<a class="action action--contact" href="mailto:{}">"#,
        escape(&profile.email)
    );
    Icon::Envelope.render_into(out, "md");
    out.push_str(r#"<span class="action__label">Get in touch</span></a>"#);

    out.push_str("</div></div></article>");
}

// ── Articles ──────────────────────────────────────────────────────────────────

fn render_articles(out: &mut String, feed: &ArticleFeed) {
    out.push_str(r#"<article class="card card--articles" data-kind="articles"><div class="articles">"#);

    for tile in feed.tiles.iter().take(ARTICLE_TILES) {
        let _ = write!(
            out,
            r#"<a class="article-tile card--glass" href="{}" {EXTERNAL_LINK_ATTRS}>"#,
            escape(&tile.url)
        );
        out.push_str(r#"<div class="card__tint" aria-hidden="true"></div>"#);
        let _ = write!(
            out,
            r#"<div class="article-tile__thumb"><img src="{}" alt="" draggable="false" /></div>"#,
            escape(&tile.thumbnail_src)
        );
        out.push_str(r#"<div class="article-tile__body">"#);
        icons::render_mask(out, &tile.platform_icon, "lg");
        let _ = write!(
            out,
            r#"<div class="article-tile__title-wrap"><span class="article-tile__title clamp-3">{}</span></div>"#,
            escape(&tile.title)
        );
        out.push_str("</div></a>");
    }

    let _ = write!(
        out,
        r#"<a class="read-more pill--glass" href="{}" {EXTERNAL_LINK_ATTRS}>"#,
        escape(&feed.more_url)
    );
    out.push_str(r#"<span class="read-more__halo" aria-hidden="true"></span>"#);
    out.push_str(r#"<span class="read-more__inset" aria-hidden="true"></span>"#);
    Icon::BookOpen.render_into(out, "md");
    out.push_str(r#"<span class="action__label">Read more</span></a>"#);

    out.push_str("</div></article>");
}
