//! Widgets for the streakline dashboard.
//!
//! This module provides:
//! - [`ChallengeCard`] - One challenge: header, description, timeline
//! - [`TimelineTrack`] - Progress fill, day markers, and avatar chips
//! - [`Footer`] - Key hints plus the motivational message
//! - [`HelpOverlay`] - Modal key reference

mod card;
mod footer;
mod help;
mod track;

pub use card::{ChallengeCard, CARD_HEIGHT};
pub use footer::{Footer, KeyHint};
pub use help::HelpOverlay;
pub use track::{track_virtual_width, AvatarSlot, TimelineTrack, TRACK_HEIGHT};
