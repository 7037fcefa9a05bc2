//! Shared helpers for TUI tests.

use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use streakline_engine::{Challenge, Participant};

/// The fixed date used across rendering tests: day 6 of the sample window.
pub fn sample_today() -> NaiveDate {
    ymd(2025, 7, 13)
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_challenge() -> Challenge {
    Challenge {
        id: "smoke".into(),
        name: "Quit Smoking".into(),
        description: "Break free from nicotine by staying smoke-free for 30 days.".into(),
        start_date: ymd(2025, 7, 8),
        end_date: ymd(2025, 8, 8),
    }
}

pub fn zero_length_challenge() -> Challenge {
    Challenge {
        id: "sprint".into(),
        name: "One Day Reset".into(),
        description: "A single-day detox.".into(),
        start_date: ymd(2025, 7, 8),
        end_date: ymd(2025, 7, 8),
    }
}

pub fn sample_participant(id: &str, name: &str, y: i32, m: u32, d: u32) -> Participant {
    Participant {
        id: id.into(),
        name: name.into(),
        photo_url: format!("https://example.com/{id}.jpg"),
        join_date: ymd(y, m, d),
        challenge_id: "smoke".into(),
    }
}

/// Flatten a buffer into newline-separated rows of symbols.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}
