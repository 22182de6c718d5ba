//! Shared UI components
//!
//! Reusable primitives: cards, placeholders, headers and modal chrome.

pub mod empty_state;
pub mod item_card;
pub mod loading;
pub mod modal;
pub mod view_header;
