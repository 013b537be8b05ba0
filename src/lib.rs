//! Portfolio site — a server-rendered single page: hero heading, location
//! badge, and a horizontally scrolling carousel of project, profile and
//! article cards.
//!
//! The binary entry point is `src/main.rs`; everything it wires together is
//! exposed here for integration tests.

pub mod cards;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod html;
pub mod icons;
pub mod logger;
pub mod metadata;
pub mod page;
pub mod server;
