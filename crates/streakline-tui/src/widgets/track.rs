//! Timeline track widget.
//!
//! Renders one challenge timeline as three rows: avatar chips above, the
//! track itself (progress fill with day-marker ticks), and day labels below.
//! The track has a virtual width wider than the terminal when the challenge
//! has many days; `pan` selects the visible window, mirroring the original
//! dashboard's horizontal scroll.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use streakline_engine::{ChallengeProgress, DayMarker};

use crate::theme::Theme;

/// Rows the track occupies: avatars, track, day labels.
pub const TRACK_HEIGHT: u16 = 3;

/// Cells per challenge day on the virtual track.
const CELLS_PER_DAY: i64 = 3;

/// Virtual track width in cells for an inclusive day count.
pub fn track_virtual_width(day_count: i64) -> u16 {
    u16::try_from(day_count.saturating_mul(CELLS_PER_DAY)).unwrap_or(u16::MAX)
}

/// An avatar chip placed on the track.
#[derive(Debug, Clone)]
pub struct AvatarSlot {
    /// Two-character initials shown on the track.
    pub initials: String,

    /// Horizontal position in `[0, 100]`.
    pub position_percent: f64,
}

/// Timeline track widget.
pub struct TimelineTrack<'a> {
    progress: &'a ChallengeProgress,
    markers: &'a [DayMarker],
    avatars: &'a [AvatarSlot],
    accent: Color,
    theme: &'a Theme,
    pan: u16,
    virtual_width: u16,
}

impl<'a> TimelineTrack<'a> {
    /// Create a new track widget.
    pub fn new(
        progress: &'a ChallengeProgress,
        markers: &'a [DayMarker],
        avatars: &'a [AvatarSlot],
        accent: Color,
        theme: &'a Theme,
    ) -> Self {
        Self {
            progress,
            markers,
            avatars,
            accent,
            theme,
            pan: 0,
            virtual_width: 0,
        }
    }

    /// Set how many columns the visible window is panned to the right.
    #[must_use]
    pub fn pan(mut self, pan: u16) -> Self {
        self.pan = pan;
        self
    }

    /// Set the virtual track width; clamped up to the render width.
    #[must_use]
    pub fn virtual_width(mut self, width: u16) -> Self {
        self.virtual_width = width;
        self
    }
}

impl Widget for TimelineTrack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < TRACK_HEIGHT {
            return;
        }

        let width = usize::from(self.virtual_width.max(area.width));
        let visible = usize::from(area.width);
        let pan = usize::from(self.pan).min(width - visible);

        let blank = (' ', Style::default());
        let mut avatar_row = vec![blank; width];
        let mut track_row = vec![('\u{2500}', Style::default().fg(self.theme.muted)); width]; // ─
        let mut label_row = vec![blank; width];

        // Progress fill
        let fill_extent = (self.progress.fraction * width as f64).round() as usize;
        for cell in track_row.iter_mut().take(fill_extent) {
            *cell = ('\u{2501}', Style::default().fg(self.accent)); // ━
        }

        // Day-marker ticks over the fill
        for marker in self.markers {
            let col = percent_to_col(marker.position_percent, width);
            track_row[col] = if marker.highlighted {
                ('\u{253c}', Style::default().fg(self.theme.text)) // ┼
            } else {
                ('\u{2534}', Style::default().fg(self.theme.muted)) // ┴
            };
        }

        // Current-day indicator sits on its marker
        if let Some(current) = self
            .markers
            .iter()
            .find(|m| i64::from(m.day) == self.progress.current_day)
        {
            let col = percent_to_col(current.position_percent, width);
            track_row[col] = (
                '\u{25cf}', // ●
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            );
        }

        // Labels under highlighted markers, skipping collisions
        let mut next_free = 0usize;
        for marker in self.markers.iter().filter(|m| m.highlighted) {
            let label = marker.day.to_string();
            let col = percent_to_col(marker.position_percent, width)
                .min(width.saturating_sub(label.len()));
            if col < next_free {
                continue;
            }
            let style = if i64::from(marker.day) == self.progress.current_day {
                Style::default().fg(self.theme.text)
            } else {
                Style::default().fg(self.theme.muted)
            };
            write_str(&mut label_row, col, &label, style);
            next_free = col + label.len() + 1;
        }

        // Avatar chips, centered on their position; later chips may overlap
        // earlier ones just like the original's stacked avatars.
        let chip_style = Style::default().fg(self.theme.base).bg(self.accent);
        for avatar in self.avatars {
            let col = percent_to_col(avatar.position_percent, width);
            let start = col.saturating_sub(1).min(width.saturating_sub(2));
            write_str(&mut avatar_row, start, &avatar.initials, chip_style);
        }

        // Slice out the visible window and paint the three rows.
        for (offset, row) in [&avatar_row, &track_row, &label_row].into_iter().enumerate() {
            let line = cells_to_line(&row[pan..pan + visible]);
            Paragraph::new(line).render(
                Rect::new(area.x, area.y + offset as u16, area.width, 1),
                buf,
            );
        }
    }
}

/// Map a percentage in `[0, 100]` to a column on a track of `width` cells.
fn percent_to_col(percent: f64, width: usize) -> usize {
    let span = width.saturating_sub(1) as f64;
    ((percent / 100.0) * span).round() as usize
}

fn write_str(cells: &mut [(char, Style)], start: usize, text: &str, style: Style) {
    for (i, ch) in text.chars().enumerate() {
        if let Some(cell) = cells.get_mut(start + i) {
            *cell = (ch, style);
        }
    }
}

fn cells_to_line(cells: &[(char, Style)]) -> Line<'static> {
    Line::from(
        cells
            .iter()
            .map(|(ch, style)| Span::styled(ch.to_string(), *style))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use streakline_engine::{challenge_progress, day_markers};

    fn render(track: TimelineTrack<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, TRACK_HEIGHT);
        let mut buf = Buffer::empty(area);
        track.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_track_labels_first_and_last_day() {
        let challenge = crate::test_utils::sample_challenge();
        let progress = challenge_progress(&challenge, crate::test_utils::sample_today());
        let markers = day_markers(32);
        let theme = Theme::mocha();
        let track = TimelineTrack::new(&progress, &markers, &[], theme.accents[0], &theme);

        let rendered = render(track, 96);
        let labels = rendered.lines().nth(2).unwrap();
        assert!(labels.trim_start().starts_with('1'));
        assert!(labels.trim_end().ends_with("32"));
        assert!(labels.contains("15"));
    }

    #[test]
    fn test_track_shows_fill_and_current_day() {
        let challenge = crate::test_utils::sample_challenge();
        let progress = challenge_progress(&challenge, crate::test_utils::sample_today());
        let markers = day_markers(32);
        let theme = Theme::mocha();
        let track = TimelineTrack::new(&progress, &markers, &[], theme.accents[0], &theme);

        let rendered = render(track, 96);
        let row = rendered.lines().nth(1).unwrap();
        assert!(row.contains('\u{2501}')); // some fill
        assert!(row.contains('\u{2500}')); // some empty track
        assert!(row.contains('\u{25cf}')); // current-day dot
    }

    #[test]
    fn test_track_places_avatars() {
        let challenge = crate::test_utils::sample_challenge();
        let progress = challenge_progress(&challenge, crate::test_utils::sample_today());
        let markers = day_markers(32);
        let avatars = vec![
            AvatarSlot {
                initials: "AY".into(),
                position_percent: 0.0,
            },
            AvatarSlot {
                initials: "LI".into(),
                position_percent: 100.0,
            },
        ];
        let theme = Theme::mocha();
        let track = TimelineTrack::new(&progress, &markers, &avatars, theme.accents[0], &theme);

        let rendered = render(track, 96);
        let row = rendered.lines().next().unwrap();
        assert!(row.contains("AY"));
        assert!(row.contains("LI"));
    }

    #[test]
    fn test_pan_shifts_window() {
        let challenge = crate::test_utils::sample_challenge();
        let progress = challenge_progress(&challenge, crate::test_utils::sample_today());
        let markers = day_markers(32);
        let theme = Theme::mocha();
        let virtual_width = track_virtual_width(32);

        let panned = TimelineTrack::new(&progress, &markers, &[], theme.accents[0], &theme)
            .virtual_width(virtual_width)
            .pan(virtual_width); // clamped to the far edge

        let rendered = render(panned, 40);
        let labels = rendered.lines().nth(2).unwrap();
        assert!(!labels.trim_start().starts_with('1'));
        assert!(labels.trim_end().ends_with("32"));
    }

    #[test]
    fn test_single_day_track_renders_complete() {
        let challenge = crate::test_utils::zero_length_challenge();
        let progress = challenge_progress(&challenge, challenge.start_date);
        let markers = day_markers(1);
        let theme = Theme::mocha();
        let track = TimelineTrack::new(&progress, &markers, &[], theme.accents[0], &theme);

        let rendered = render(track, 20);
        let row = rendered.lines().nth(1).unwrap();
        assert!(row.contains('\u{2501}')); // fully filled
        assert!(!row.contains('\u{2500}'));
    }

    #[test]
    fn test_virtual_width_scales_with_days() {
        assert_eq!(track_virtual_width(32), 96);
        assert_eq!(track_virtual_width(1), 3);
    }
}
