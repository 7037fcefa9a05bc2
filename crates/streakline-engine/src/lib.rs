//! streakline-engine: Headless timeline engine for habit-challenge dashboards
//!
//! This crate provides the core computation for streakline, including:
//! - The challenge/participant data model and JSON loader
//! - Day arithmetic and progress fractions
//! - Day-marker and participant placement on a normalized timeline
//! - Motivational message selection
//!
//! Everything here is pure and clock-free: "today" is always a parameter, so
//! the same inputs always produce the same layout values.

pub mod loader;
pub mod model;
pub mod timeline;

// Re-export commonly used types
pub use loader::{LoadError, CHALLENGES_FILE, PARTICIPANTS_FILE};
pub use model::{Challenge, Dataset, Participant};
pub use timeline::{
    average_progress, challenge_progress, clamp_fraction, day_markers, days_between, message_tier,
    motivational_message, participant_position, ChallengeProgress, DayMarker, MessageTier,
};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
