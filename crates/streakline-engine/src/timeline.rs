//! Timeline layout and progress computation.
//!
//! Pure transforms from challenge/participant dates to normalized layout
//! values: day counts, progress fractions, marker positions, and avatar
//! placement. No I/O and no clock access; callers supply "today".
//!
//! The only failure-prone arithmetic is dividing by a challenge's total day
//! count. A zero-length challenge (start == end) is treated as already
//! complete instead of producing NaN, so every fraction leaving this module
//! is finite and within `[0, 1]`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Challenge, Participant};

/// Signed number of whole days from `a` to `b`.
///
/// `NaiveDate` subtraction is exact calendar-day arithmetic, so there is no
/// timezone or DST drift to round away.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Clamp `value` into `[min, max]`.
pub fn clamp_fraction(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Computed progress values for one challenge on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeProgress {
    /// Whole days from start to end (0 for a single-day challenge).
    pub total_days: i64,

    /// Whole days elapsed since the start, floored at 0.
    pub days_passed: i64,

    /// 1-indexed day counter, capped at the challenge's last day.
    /// Always in `[1, total_days + 1]`.
    pub current_day: i64,

    /// Elapsed fraction of the challenge, always finite in `[0, 1]`.
    pub fraction: f64,
}

impl ChallengeProgress {
    /// Inclusive day count of the challenge ("of M" in "Day N of M").
    pub fn day_count(&self) -> i64 {
        self.total_days + 1
    }
}

/// Compute progress for a challenge as of `today`.
///
/// A zero-length challenge counts as 100% complete.
pub fn challenge_progress(challenge: &Challenge, today: NaiveDate) -> ChallengeProgress {
    let total_days = days_between(challenge.start_date, challenge.end_date);
    let days_passed = days_between(challenge.start_date, today).max(0);
    let fraction = if total_days == 0 {
        1.0
    } else {
        clamp_fraction(days_passed as f64 / total_days as f64, 0.0, 1.0)
    };
    let current_day = (days_passed + 1).min(total_days + 1);
    ChallengeProgress {
        total_days,
        days_passed,
        current_day,
        fraction,
    }
}

/// One tick on the timeline representing a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMarker {
    /// 1-indexed day number.
    pub day: u32,

    /// Horizontal position in `[0, 100]`.
    pub position_percent: f64,

    /// Whether this marker is rendered prominently (every 5th day, plus
    /// first and last).
    pub highlighted: bool,
}

/// Produce one marker per day from 1 to `total_days_inclusive`, ascending.
///
/// The sequence is fully materialized since consumers render left to right
/// and may iterate more than once. A single-day timeline gets one marker at
/// position 0; a zero-day count yields no markers.
pub fn day_markers(total_days_inclusive: u32) -> Vec<DayMarker> {
    (1..=total_days_inclusive)
        .map(|day| {
            let position_percent = if total_days_inclusive > 1 {
                f64::from(day - 1) / f64::from(total_days_inclusive - 1) * 100.0
            } else {
                0.0
            };
            DayMarker {
                day,
                position_percent,
                highlighted: day % 5 == 0 || day == 1 || day == total_days_inclusive,
            }
        })
        .collect()
}

/// Horizontal position of a participant's avatar in `[0, 100]`, based on how
/// far into the challenge they joined.
///
/// Join dates outside the challenge window clamp to the nearest edge, and a
/// zero-length challenge places everyone at 100%.
pub fn participant_position(challenge: &Challenge, participant: &Participant) -> f64 {
    let total_days = days_between(challenge.start_date, challenge.end_date);
    if total_days == 0 {
        return 100.0;
    }
    let days_from_start = days_between(challenge.start_date, participant.join_date);
    clamp_fraction(days_from_start as f64 / total_days as f64, 0.0, 1.0) * 100.0
}

/// Progress bucket for the motivational message.
///
/// A stateless classification of the fraction at call time; there are no
/// transitions between tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTier {
    /// Under 20% elapsed.
    Starting,
    /// 20% up to 50%.
    BuildingMomentum,
    /// 50% up to 80%.
    Halfway,
    /// 80% and beyond.
    Finishing,
}

impl std::fmt::Display for MessageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Starting => write!(f, "starting"),
            Self::BuildingMomentum => write!(f, "building momentum"),
            Self::Halfway => write!(f, "halfway"),
            Self::Finishing => write!(f, "finishing"),
        }
    }
}

/// Classify a progress fraction into its message tier.
pub fn message_tier(fraction: f64) -> MessageTier {
    if fraction < 0.2 {
        MessageTier::Starting
    } else if fraction < 0.5 {
        MessageTier::BuildingMomentum
    } else if fraction < 0.8 {
        MessageTier::Halfway
    } else {
        MessageTier::Finishing
    }
}

/// The motivational message for a progress fraction.
pub fn motivational_message(fraction: f64) -> &'static str {
    match message_tier(fraction) {
        MessageTier::Starting => "Great start! Every journey begins with a single step.",
        MessageTier::BuildingMomentum => "You're building momentum! Keep going strong.",
        MessageTier::Halfway => "Amazing progress! You're more than halfway there.",
        MessageTier::Finishing => "You're so close to the finish line! Don't give up now.",
    }
}

/// Mean progress fraction across all challenges as of `today`.
///
/// Computed from the actual challenge data rather than assumed; an empty
/// slice yields 0.
pub fn average_progress(challenges: &[Challenge], today: NaiveDate) -> f64 {
    if challenges.is_empty() {
        return 0.0;
    }
    let sum: f64 = challenges
        .iter()
        .map(|c| challenge_progress(c, today).fraction)
        .sum();
    sum / challenges.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn challenge(start: NaiveDate, end: NaiveDate) -> Challenge {
        Challenge {
            id: "smoke".into(),
            name: "Quit Smoking".into(),
            description: "Stay smoke-free.".into(),
            start_date: start,
            end_date: end,
        }
    }

    fn participant(join: NaiveDate) -> Participant {
        Participant {
            id: "u1".into(),
            name: "Aymen".into(),
            photo_url: "https://example.com/a.jpg".into(),
            join_date: join,
            challenge_id: "smoke".into(),
        }
    }

    #[test]
    fn test_days_between_same_date_is_zero() {
        let d = ymd(2025, 7, 8);
        assert_eq!(days_between(d, d), 0);
    }

    #[test]
    fn test_days_between_is_antisymmetric() {
        let a = ymd(2025, 7, 8);
        let b = ymd(2025, 8, 8);
        assert_eq!(days_between(a, b), 31);
        assert_eq!(days_between(b, a), -31);
        assert_eq!(days_between(a, b), -days_between(b, a));
    }

    #[test]
    fn test_days_between_crosses_month_and_year() {
        assert_eq!(days_between(ymd(2025, 12, 30), ymd(2026, 1, 2)), 3);
        assert_eq!(days_between(ymd(2024, 2, 28), ymd(2024, 3, 1)), 2); // leap year
    }

    #[test]
    fn test_clamp_fraction() {
        assert_eq!(clamp_fraction(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp_fraction(-0.3, 0.0, 1.0), 0.0);
        assert_eq!(clamp_fraction(1.7, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_progress_mid_challenge() {
        // Day 6 of the bundled challenge window.
        let c = challenge(ymd(2025, 7, 8), ymd(2025, 8, 8));
        let progress = challenge_progress(&c, ymd(2025, 7, 13));
        assert_eq!(progress.total_days, 31);
        assert_eq!(progress.days_passed, 5);
        assert_eq!(progress.current_day, 6);
        assert_eq!(progress.day_count(), 32);
        assert!((progress.fraction - 5.0 / 31.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_before_start_floors_at_day_one() {
        let c = challenge(ymd(2025, 7, 8), ymd(2025, 8, 8));
        let progress = challenge_progress(&c, ymd(2024, 1, 1));
        assert_eq!(progress.days_passed, 0);
        assert_eq!(progress.current_day, 1);
        assert_eq!(progress.fraction, 0.0);
    }

    #[test]
    fn test_progress_after_end_caps_at_last_day() {
        let c = challenge(ymd(2025, 7, 8), ymd(2025, 8, 8));
        let progress = challenge_progress(&c, ymd(2030, 1, 1));
        assert_eq!(progress.current_day, 32);
        assert_eq!(progress.fraction, 1.0);
    }

    #[test]
    fn test_progress_zero_length_challenge_is_complete() {
        let d = ymd(2025, 7, 8);
        let c = challenge(d, d);
        let progress = challenge_progress(&c, d);
        assert_eq!(progress.total_days, 0);
        assert_eq!(progress.current_day, 1);
        assert_eq!(progress.fraction, 1.0);
        assert!(progress.fraction.is_finite());
    }

    #[test]
    fn test_progress_fraction_always_in_unit_range() {
        let c = challenge(ymd(2025, 7, 8), ymd(2025, 8, 8));
        for today in [
            ymd(1970, 1, 1),
            ymd(2025, 7, 7),
            ymd(2025, 7, 8),
            ymd(2025, 8, 8),
            ymd(2099, 12, 31),
        ] {
            let progress = challenge_progress(&c, today);
            assert!(progress.fraction >= 0.0 && progress.fraction <= 1.0);
            assert!(progress.current_day >= 1);
            assert!(progress.current_day <= progress.total_days + 1);
        }
    }

    #[test]
    fn test_day_markers_thirty_days() {
        let markers = day_markers(30);
        assert_eq!(markers.len(), 30);
        assert!(markers[0].highlighted);
        assert!(markers[29].highlighted);
        for marker in &markers {
            let expected = marker.day % 5 == 0 || marker.day == 1 || marker.day == 30;
            assert_eq!(marker.highlighted, expected, "day {}", marker.day);
        }
        assert_eq!(markers[0].position_percent, 0.0);
        assert_eq!(markers[29].position_percent, 100.0);
    }

    #[test]
    fn test_day_markers_are_ascending() {
        let markers = day_markers(32);
        for pair in markers.windows(2) {
            assert!(pair[0].day < pair[1].day);
            assert!(pair[0].position_percent < pair[1].position_percent);
        }
    }

    #[test]
    fn test_day_markers_single_day() {
        let markers = day_markers(1);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].position_percent, 0.0);
        assert!(markers[0].highlighted);
    }

    #[test]
    fn test_day_markers_zero_days_is_empty() {
        assert!(day_markers(0).is_empty());
    }

    #[test]
    fn test_participant_position_at_edges() {
        let c = challenge(ymd(2025, 7, 8), ymd(2025, 8, 8));
        assert_eq!(participant_position(&c, &participant(ymd(2025, 7, 8))), 0.0);
        assert_eq!(
            participant_position(&c, &participant(ymd(2025, 8, 8))),
            100.0
        );
    }

    #[test]
    fn test_participant_position_clamps_outside_window() {
        let c = challenge(ymd(2025, 7, 8), ymd(2025, 8, 8));
        assert_eq!(participant_position(&c, &participant(ymd(2020, 1, 1))), 0.0);
        assert_eq!(
            participant_position(&c, &participant(ymd(2030, 1, 1))),
            100.0
        );
    }

    #[test]
    fn test_participant_position_zero_length_challenge() {
        let d = ymd(2025, 7, 8);
        let c = challenge(d, d);
        let position = participant_position(&c, &participant(d));
        assert_eq!(position, 100.0);
        assert!(position.is_finite());
    }

    #[test]
    fn test_message_tier_buckets() {
        assert_eq!(message_tier(0.0), MessageTier::Starting);
        assert_eq!(message_tier(0.1), MessageTier::Starting);
        assert_eq!(message_tier(0.2), MessageTier::BuildingMomentum);
        assert_eq!(message_tier(0.49), MessageTier::BuildingMomentum);
        assert_eq!(message_tier(0.5), MessageTier::Halfway);
        assert_eq!(message_tier(0.6), MessageTier::Halfway);
        assert_eq!(message_tier(0.8), MessageTier::Finishing);
        assert_eq!(message_tier(0.85), MessageTier::Finishing);
        assert_eq!(message_tier(1.0), MessageTier::Finishing);
    }

    #[test]
    fn test_message_tier_display_names() {
        assert_eq!(MessageTier::Starting.to_string(), "starting");
        assert_eq!(MessageTier::BuildingMomentum.to_string(), "building momentum");
        assert_eq!(MessageTier::Halfway.to_string(), "halfway");
        assert_eq!(MessageTier::Finishing.to_string(), "finishing");
    }

    #[test]
    fn test_motivational_message_matches_tier() {
        assert!(motivational_message(0.1).starts_with("Great start"));
        assert!(motivational_message(0.6).contains("halfway"));
        assert!(motivational_message(0.85).contains("finish line"));
    }

    #[test]
    fn test_average_progress_is_mean_of_fractions() {
        let a = challenge(ymd(2025, 7, 8), ymd(2025, 8, 8));
        let mut b = challenge(ymd(2025, 7, 1), ymd(2025, 7, 11));
        b.id = "alcohol".into();
        let today = ymd(2025, 7, 13);
        // a: 5/31, b: past its end so 1.0.
        let expected = (5.0 / 31.0 + 1.0) / 2.0;
        let avg = average_progress(&[a, b], today);
        assert!((avg - expected).abs() < 1e-9);
    }

    #[test]
    fn test_average_progress_empty_is_zero() {
        assert_eq!(average_progress(&[], ymd(2025, 7, 13)), 0.0);
    }
}
