//! Carousel container — a horizontally scrolling strip of cards.
//!
//! # Layout
//!
//! The strip scrolls on the x axis only and leaves vertical overflow visible
//! so badges and shadows are not clipped. Each card wrapper snaps its leading
//! edge to the strip start with *proximity* snapping, and the scrollbar
//! chrome is hidden (all of this lives in `site.css`, keyed off the classes
//! emitted here).
//!
//! # Initial peek
//!
//! On mount the strip is scrolled to [`INITIAL_PEEK_OFFSET`] so the first
//! card is cut at the left edge. [`PeekOnMount`] emits the browser hook that
//! performs it: once, after the first layout, gated by a has-run flag on the
//! element.
//!
//! [`ScrollState`] is the reference model of that hook, not runtime state.
//! The server never scrolls anything; the model pins down the two-phase
//! transition (`unscrolled-initial` → `scrolled`) that `PeekOnMount::SCRIPT`
//! implements, and the tests exercise it in place of a browser. Only its
//! initial phase and offset reach the markup, as `data-scroll-state` and
//! `data-initial-scroll`.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::cards::{render_card, CardDescriptor};
use crate::error::AppError;
use crate::html::escape;

/// Initial horizontal scroll, in CSS pixels.
pub const INITIAL_PEEK_OFFSET: u32 = 186;

/// Accessible name of the strip.
pub const CAROUSEL_LABEL: &str = "Projects carousel";

// ── ScrollState ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Rendered, initial peek not yet applied.
    UnscrolledInitial,
    /// Peek applied or the user has scrolled.
    Scrolled,
}

impl ScrollPhase {
    /// Value of the strip's `data-scroll-state` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollPhase::UnscrolledInitial => "unscrolled-initial",
            ScrollPhase::Scrolled => "scrolled",
        }
    }
}

/// Horizontal scroll position of one mounted carousel.
#[derive(Debug, Clone)]
pub struct ScrollState {
    phase: ScrollPhase,
    offset: u32,
    peek: u32,
}

impl ScrollState {
    pub fn new(peek: u32) -> Self {
        Self { phase: ScrollPhase::UnscrolledInitial, offset: 0, peek }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn peek(&self) -> u32 {
        self.peek
    }

    /// Mount hook: scroll to the peek offset. Returns `true` the one time it
    /// takes effect; later calls (re-renders) change nothing.
    pub fn apply_initial_peek(&mut self) -> bool {
        if self.phase != ScrollPhase::UnscrolledInitial {
            return false;
        }
        self.offset = self.peek;
        self.phase = ScrollPhase::Scrolled;
        true
    }

    /// The user moved the strip; their position wins from now on.
    pub fn user_scrolled(&mut self, offset: u32) {
        self.offset = offset;
        self.phase = ScrollPhase::Scrolled;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(INITIAL_PEEK_OFFSET)
    }
}

// ── PeekOnMount ───────────────────────────────────────────────────────────────

/// Browser-side counterpart of [`ScrollState::apply_initial_peek`].
///
/// The script waits for the first animation frame (layout committed), reads
/// the offset from `data-initial-scroll`, and marks the strip with
/// `data-peek-applied` so a second run is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct PeekOnMount;

impl PeekOnMount {
    pub const SCRIPT: &'static str = r#"(function () {
  var strips = document.querySelectorAll("[data-carousel]");
  requestAnimationFrame(function () {
    strips.forEach(function (el) {
      if (el.dataset.peekApplied) return;
      el.dataset.peekApplied = "1";
      el.scrollLeft = Number(el.dataset.initialScroll) || 0;
      el.dataset.scrollState = "scrolled";
    });
  });
})();"#;

    pub fn render_into(out: &mut String) {
        out.push_str("<script>");
        out.push_str(Self::SCRIPT);
        out.push_str("</script>");
    }
}

// ── Carousel ──────────────────────────────────────────────────────────────────

/// An immutable, ordered set of cards with unique ids.
#[derive(Debug, Clone)]
pub struct Carousel {
    cards: Vec<CardDescriptor>,
    scroll: ScrollState,
}

impl Carousel {
    /// Build a carousel. Card ids must be unique.
    pub fn new(cards: Vec<CardDescriptor>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(AppError::Content(format!("duplicate card id '{}'", card.id)));
            }
        }
        Ok(Self { cards, scroll: ScrollState::default() })
    }

    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }

    /// Scroll state before mount; what the rendered markup starts from.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Render the strip: one snap wrapper per card, in list order.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cards.len() * 3072);
        let _ = write!(
            out,
            r#"<div class="carousel" data-carousel aria-label="{CAROUSEL_LABEL}" data-initial-scroll="{}" data-scroll-state="{}">"#,
            self.scroll.peek(),
            self.scroll.phase().as_str()
        );
        for card in &self.cards {
            let _ = write!(out, r#"<div class="carousel__item" data-card-id="{}">"#, escape(&card.id));
            out.push_str(&render_card(card));
            out.push_str("</div>");
        }
        out.push_str("</div>");
        out
    }
}
