//! UI Components
//!
//! Leptos components for the check feed.

pub mod check_card;
pub mod check_feed;

pub use check_card::CheckCard;
pub use check_feed::CheckFeed;
