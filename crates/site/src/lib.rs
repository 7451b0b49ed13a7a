#![deny(unsafe_code)]

//! Page models for the Bleya landing experience.
//!
//! Composes the hero pipeline and the Gemini relay into the two pages the
//! site ships: the scroll-expansion landing page and the chat page.

/// Chat page transcript and submission lifecycle.
pub mod chat;
/// Landing page: hero mount, handoff latch, decorative effects.
pub mod home;

pub use chat::{ChatEntry, ChatPage, ChatRejection, ChatRole};
pub use home::HomePage;
