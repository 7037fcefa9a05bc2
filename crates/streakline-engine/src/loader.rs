//! Dataset loading and validation.
//!
//! The loader is the only engine component that touches the filesystem. It
//! validates everything up front so the timeline math in
//! [`crate::timeline`] can assume well-formed records: date ranges are
//! checked before any division happens, and participants pointing at an
//! unknown challenge are reported instead of silently dropped.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use tracing::warn;

use crate::model::{Challenge, Dataset, Participant};

/// File name for the challenge collection inside a data directory.
pub const CHALLENGES_FILE: &str = "challenges.json";

/// File name for the participant collection inside a data directory.
pub const PARTICIPANTS_FILE: &str = "participants.json";

impl Dataset {
    /// Load and validate a dataset from a directory containing
    /// `challenges.json` and `participants.json`.
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        let challenges = read_json(&dir.join(CHALLENGES_FILE))?;
        let participants = read_json(&dir.join(PARTICIPANTS_FILE))?;
        let dataset = Self {
            challenges,
            participants,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Save the dataset into a directory, creating it if needed.
    pub fn save(&self, dir: &Path) -> Result<(), LoadError> {
        std::fs::create_dir_all(dir).map_err(LoadError::Io)?;
        write_json(&dir.join(CHALLENGES_FILE), &self.challenges)?;
        write_json(&dir.join(PARTICIPANTS_FILE), &self.participants)?;
        Ok(())
    }

    /// Check dataset invariants.
    ///
    /// Inverted date ranges and duplicate challenge ids are hard errors.
    /// Participants referencing an unknown challenge are kept but logged;
    /// they simply never appear on a timeline.
    pub fn validate(&self) -> Result<(), LoadError> {
        let mut seen = HashSet::new();
        for challenge in &self.challenges {
            if challenge.start_date > challenge.end_date {
                return Err(LoadError::InvalidRange {
                    id: challenge.id.clone(),
                });
            }
            if !seen.insert(challenge.id.as_str()) {
                return Err(LoadError::DuplicateId {
                    id: challenge.id.clone(),
                });
            }
        }
        for participant in self.orphaned_participants() {
            warn!(
                participant = %participant.id,
                challenge = %participant.challenge_id,
                "Participant references unknown challenge"
            );
        }
        Ok(())
    }

    /// The bundled demo dataset: three 30-day abstinence challenges and six
    /// participants.
    pub fn sample() -> Self {
        Self {
            challenges: vec![
                Challenge {
                    id: "smoke".into(),
                    name: "Quit Smoking".into(),
                    description: "Break free from nicotine by staying smoke-free for 30 days. \
                                  Replace the urge with deep breathing, water, and healthy snacks."
                        .into(),
                    start_date: ymd(2025, 7, 8),
                    end_date: ymd(2025, 8, 8),
                },
                Challenge {
                    id: "adult".into(),
                    name: "Avoid Adult Content".into(),
                    description: "Train your mind by steering clear of explicit media for 30 days. \
                                  Spend the extra time on hobbies, friends, or learning."
                        .into(),
                    start_date: ymd(2025, 7, 8),
                    end_date: ymd(2025, 8, 8),
                },
                Challenge {
                    id: "alcohol".into(),
                    name: "No Alcohol".into(),
                    description: "Reset your body by avoiding alcoholic drinks for 30 straight \
                                  days. Hydrate, move, and notice improved sleep and energy."
                        .into(),
                    start_date: ymd(2025, 7, 8),
                    end_date: ymd(2025, 8, 8),
                },
            ],
            participants: vec![
                sample_participant("u1", "Aymen", "men/31", ymd(2025, 7, 8), "smoke"),
                sample_participant("u2", "Lina", "women/44", ymd(2025, 7, 10), "smoke"),
                sample_participant("u3", "Youssef", "men/75", ymd(2025, 7, 12), "adult"),
                sample_participant("u4", "Sara", "women/65", ymd(2025, 7, 8), "adult"),
                sample_participant("u5", "Omar", "men/15", ymd(2025, 7, 14), "alcohol"),
                sample_participant("u6", "Maya", "women/21", ymd(2025, 7, 9), "alcohol"),
            ],
        }
    }
}

/// Literal calendar date; only called with known-valid values.
fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid literal date")
}

fn sample_participant(
    id: &str,
    name: &str,
    portrait: &str,
    join_date: NaiveDate,
    challenge_id: &str,
) -> Participant {
    Participant {
        id: id.into(),
        name: name.into(),
        photo_url: format!("https://randomuser.me/api/portraits/{portrait}.jpg"),
        join_date,
        challenge_id: challenge_id.into(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(LoadError::Io)?;
    serde_json::from_str(&content).map_err(LoadError::Parse)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), LoadError> {
    let content = serde_json::to_string_pretty(value).map_err(LoadError::Serialize)?;
    std::fs::write(path, content).map_err(LoadError::Io)
}

/// Errors that can occur when loading or saving a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Serialize error.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A challenge's start date is after its end date.
    #[error("challenge {id}: start date is after end date")]
    InvalidRange {
        /// Offending challenge id.
        id: String,
    },

    /// Two challenges share the same id.
    #[error("duplicate challenge id: {id}")]
    DuplicateId {
        /// Duplicated challenge id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_dataset_is_valid() {
        let dataset = Dataset::sample();
        assert_eq!(dataset.challenges.len(), 3);
        assert_eq!(dataset.participants.len(), 6);
        assert!(dataset.validate().is_ok());
        assert!(dataset.orphaned_participants().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("data");

        let dataset = Dataset::sample();
        dataset.save(&dir).unwrap();
        assert!(dir.join(CHALLENGES_FILE).exists());
        assert!(dir.join(PARTICIPANTS_FILE).exists());

        let loaded = Dataset::load(&dir).unwrap();
        assert_eq!(loaded.challenges, dataset.challenges);
        assert_eq!(loaded.participants, dataset.participants);
    }

    #[test]
    fn test_load_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = Dataset::load(&temp_dir.path().join("nope"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CHALLENGES_FILE), "not json").unwrap();
        std::fs::write(temp_dir.path().join(PARTICIPANTS_FILE), "[]").unwrap();
        let result = Dataset::load(temp_dir.path());
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_unparsable_date() {
        let temp_dir = TempDir::new().unwrap();
        let challenges = r#"[{
            "id": "smoke",
            "name": "Quit Smoking",
            "description": "x",
            "startDate": "July 8th",
            "endDate": "2025-08-08"
        }]"#;
        std::fs::write(temp_dir.path().join(CHALLENGES_FILE), challenges).unwrap();
        std::fs::write(temp_dir.path().join(PARTICIPANTS_FILE), "[]").unwrap();
        let result = Dataset::load(temp_dir.path());
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut dataset = Dataset::sample();
        dataset.challenges[0].end_date = ymd(2025, 7, 1);
        let result = dataset.validate();
        assert!(matches!(result, Err(LoadError::InvalidRange { id }) if id == "smoke"));
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let mut dataset = Dataset::sample();
        let mut copy = dataset.challenges[0].clone();
        copy.name = "Quit Smoking Again".into();
        dataset.challenges.push(copy);
        let result = dataset.validate();
        assert!(matches!(result, Err(LoadError::DuplicateId { id }) if id == "smoke"));
    }

    #[test]
    fn test_validate_keeps_orphaned_participants() {
        let mut dataset = Dataset::sample();
        dataset.participants[0].challenge_id = "vanished".into();
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.orphaned_participants().len(), 1);
    }
}
