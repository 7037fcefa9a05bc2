//! Data model for streakline.
//!
//! Challenges and participants are loaded once at startup and never mutated;
//! every engine operation borrows them. JSON field names are camelCase to
//! match the on-disk data files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fixed-duration habit challenge with an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Unique challenge identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short description shown on the challenge card.
    pub description: String,

    /// First day of the challenge (inclusive).
    pub start_date: NaiveDate,

    /// Last day of the challenge (inclusive). Never before `start_date` in a
    /// validated dataset.
    pub end_date: NaiveDate,
}

/// A person enrolled in exactly one challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique participant identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Avatar image reference. Older data files use the key `photo`.
    #[serde(alias = "photo")]
    pub photo_url: String,

    /// The day this participant joined. May fall outside the challenge
    /// window; placement clamps instead of rejecting.
    pub join_date: NaiveDate,

    /// Id of the challenge this participant belongs to.
    pub challenge_id: String,
}

/// The full immutable data set: every challenge and every participant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// All challenges, in display order.
    pub challenges: Vec<Challenge>,

    /// All participants across every challenge.
    pub participants: Vec<Participant>,
}

impl Dataset {
    /// Look up a challenge by id.
    pub fn challenge(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// All participants enrolled in the given challenge, in data order.
    pub fn participants_for(&self, challenge_id: &str) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| p.challenge_id == challenge_id)
            .collect()
    }

    /// Participants whose `challenge_id` matches no loaded challenge.
    ///
    /// These never receive a timeline position; the loader reports them as a
    /// data-integrity warning.
    pub fn orphaned_participants(&self) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| self.challenge(&p.challenge_id).is_none())
            .collect()
    }

    /// Check if the dataset has nothing to display.
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}
