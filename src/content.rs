//! The portfolio's content: card list, owner profile and curated articles.
//!
//! Everything here is built once on first use and shared for the life of
//! the process.

use std::sync::LazyLock;

use crate::cards::{
    ArticleFeed, ArticleTile, CardDescriptor, CardKind, Profile, ProjectLinks, ProjectType, RichText,
};
use crate::icons::ExploreIcon;

const MEDIUM_ICON: &str = "/icons/Medium_icon.svg";

static OWNER_PROFILE: LazyLock<Profile> = LazyLock::new(|| Profile {
    name: "Irene Álvarez Lorenzo".into(),
    tagline: RichText::new()
        .plain("Bridging ")
        .strong("user")
        .plain(" and ")
        .strong("business")
        .plain(" needs through technology."),
    background_src: "/images/Profile_card_image.png".into(),
    email: "irenealvarezlorenzo@icloud.com".into(),
});

static CURATED_ARTICLES: LazyLock<ArticleFeed> = LazyLock::new(|| ArticleFeed {
    tiles: vec![
        ArticleTile {
            title: "I Want to Be an Artist".into(),
            url: "https://medium.com/@irenealvlor/i-want-to-be-an-artist-79559c394c85".into(),
            thumbnail_src:
                "https://miro.medium.com/v2/resize:fit:1400/format:webp/1*erv3O-NqtN8_v1UdXUYfcg.png"
                    .into(),
            platform_icon: MEDIUM_ICON.into(),
        },
        ArticleTile {
            title: "I Asked GPT to Read Between My Lines And This Is What It Found".into(),
            url: "https://medium.com/@irenealvlor/i-asked-gpt-to-read-between-my-lines-and-this-is-what-it-found-f6085b0f1fd2".into(),
            thumbnail_src:
                "https://miro.medium.com/v2/resize:fit:1400/format:webp/1*bjKUdx_OGMf1AlXHnQLh_w.png"
                    .into(),
            platform_icon: MEDIUM_ICON.into(),
        },
        ArticleTile {
            title: "An Article Worth Reading Slowly".into(),
            url: "https://medium.com/@irenealvlor/an-article-worth-reading-slowly-de0a91270a51".into(),
            thumbnail_src:
                "https://miro.medium.com/v2/resize:fit:1400/format:webp/1*t4ChQrmj3iFkke1uIFffXw.png"
                    .into(),
            platform_icon: MEDIUM_ICON.into(),
        },
    ],
    more_url: "https://medium.com/@irenealvlor".into(),
});

/// Carousel cards, left to right.
static PORTFOLIO_CARDS: LazyLock<Vec<CardDescriptor>> = LazyLock::new(|| {
    vec![
        CardDescriptor::project("p1", "Lume")
            .with_subtitle(
                RichText::new()
                    .plain("Custom printing holds endless possibilities. ")
                    .strong("Lume")
                    .plain(" lacked a digital home, so I ")
                    .strong("turned curiosity into creation")
                    .plain("."),
            )
            .with_image("/images/Lume_card_image.png")
            .with_project_type(ProjectType::UxUi)
            .with_links(ProjectLinks {
                story_url: "https://coordinated-soybean-1e7.notion.site/Making-Custom-Printing-Click-Bringing-Lume-into-the-Spotlight-277ed4f308d5802ab4d3f18578faecf8?source=copy_link".into(),
                explore_url: "https://www.figma.com/design/9ye7ya8qm7cyn6NgwA6WDn/%F0%9F%94%A5-Lume?node-id=0-1&t=O6f8cq7sCrhdbfUi-1".into(),
                explore_icon: ExploreIcon::Figma,
            }),
        CardDescriptor::new("me", CardKind::Profile, "Profile card"),
        CardDescriptor::project("p2", "Hey Mrs DJ")
            .with_subtitle(
                RichText::new()
                    .strong("Spotify’s")
                    .plain(" DJ could cue tracks, but not ")
                    .strong("dialogue")
                    .plain(". I reimagined it to adapt to ")
                    .strong("moments")
                    .plain(" and create ")
                    .strong("emotional memory")
                    .plain("."),
            )
            .with_image("/images/Spotify_card_image.png")
            .with_project_type(ProjectType::Cx)
            .with_links(ProjectLinks {
                story_url: "https://coordinated-soybean-1e7.notion.site/Come-Mr-DJ-Song-Pon-de-Replay-Remixing-Spotify-s-DJ-with-a-Voice-that-Answers-Back-277ed4f308d58086a960cc2e83a7cea3?source=copy_link".into(),
                explore_url: "https://v0-spotify-ai-screen-design.vercel.app/".into(),
                explore_icon: ExploreIcon::V0,
            }),
        CardDescriptor::project("p3", "Carrefour")
            .with_subtitle(
                RichText::new()
                    .plain("Grocery shopping can be a hassle. So I reimagined ")
                    .strong("Carrefour’s")
                    .plain(" flow to make it ")
                    .strong("simpler")
                    .plain(", ")
                    .strong("faster")
                    .plain(", and ")
                    .strong("intuitive")
                    .plain("."),
            )
            .with_image("/images/Carrefour_card_image.png")
            .with_project_type(ProjectType::UxUi)
            .with_links(ProjectLinks {
                story_url: "https://coordinated-soybean-1e7.notion.site/No-more-lost-shoppers-Reloading-Carrefour-s-shopping-experience-277ed4f308d5805ebd43d6a4772c1b5d?source=copy_link".into(),
                explore_url: "https://www.figma.com/design/ZvLkJeJzNaOeaH9zidLO5G/%F0%9F%9B%92-Carrefour_%F0%9F%87%AC%F0%9F%87%A7?node-id=0-1&t=O6f8cq7sCrhdbfUi-1".into(),
                explore_icon: ExploreIcon::Figma,
            }),
        CardDescriptor::new("art", CardKind::Articles, "Articles"),
    ]
});

/// The site owner's profile, shown when a profile card carries none.
pub fn owner_profile() -> &'static Profile {
    &OWNER_PROFILE
}

/// The curated article feed, shown when an articles card carries none.
pub fn curated_articles() -> &'static ArticleFeed {
    &CURATED_ARTICLES
}

/// The portfolio's carousel cards in display order.
pub fn portfolio_cards() -> &'static [CardDescriptor] {
    &PORTFOLIO_CARDS
}
