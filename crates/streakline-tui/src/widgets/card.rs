//! Challenge card widget.
//!
//! One bordered card per challenge: name and date range in the header, a
//! wrapped description, the "Day N of M" counter, the timeline track, and a
//! legend line naming each participant and their join date.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use streakline_engine::{
    challenge_progress, day_markers, participant_position, Challenge, Participant,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::track::{track_virtual_width, AvatarSlot, TimelineTrack, TRACK_HEIGHT};
use crate::theme::Theme;

/// Total card height including borders.
pub const CARD_HEIGHT: u16 = 9;

/// Challenge card widget.
pub struct ChallengeCard<'a> {
    challenge: &'a Challenge,
    participants: &'a [&'a Participant],
    today: NaiveDate,
    index: usize,
    theme: &'a Theme,
    selected: bool,
    pan: u16,
}

impl<'a> ChallengeCard<'a> {
    /// Create a new card for a challenge and its participants.
    pub fn new(
        challenge: &'a Challenge,
        participants: &'a [&'a Participant],
        today: NaiveDate,
        index: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            challenge,
            participants,
            today,
            index,
            theme,
            selected: false,
            pan: 0,
        }
    }

    /// Set whether this card is the selected one.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the timeline pan offset.
    #[must_use]
    pub fn pan(mut self, pan: u16) -> Self {
        self.pan = pan;
        self
    }
}

impl Widget for ChallengeCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.theme.accent(self.index);
        let border_style = if self.selected {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .title(format!(" {} ", self.challenge.name))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(self.theme.base));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = usize::from(inner.width);
        let mut y = inner.y;

        // Dates on the left, day counter on the right
        let progress = challenge_progress(self.challenge, self.today);
        let dates = format!(
            "{} - {}",
            short_date(self.challenge.start_date),
            short_date(self.challenge.end_date)
        );
        let counter = format!(
            "Day {} of {} \u{00b7} {}%",
            progress.current_day,
            progress.day_count(),
            (progress.fraction * 100.0).round()
        );
        let padding = width
            .saturating_sub(dates.width() + counter.width())
            .max(1);
        let header = Line::from(vec![
            Span::styled(dates, Style::default().fg(self.theme.subtext)),
            Span::raw(" ".repeat(padding)),
            Span::styled(counter, Style::default().fg(accent)),
        ]);
        Paragraph::new(header).render(Rect::new(inner.x, y, inner.width, 1), buf);
        y += 1;

        // Description, wrapped to at most two lines
        for wrapped in textwrap::wrap(&self.challenge.description, width)
            .into_iter()
            .take(2)
        {
            if y >= inner.y + inner.height {
                return;
            }
            let line = Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(self.theme.subtext),
            ));
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
            y += 1;
        }
        y = inner.y + 3;

        // Timeline track
        if y + TRACK_HEIGHT > inner.y + inner.height {
            return;
        }
        let day_total = u32::try_from(progress.day_count()).unwrap_or(0);
        let markers = day_markers(day_total);
        let avatars: Vec<AvatarSlot> = self
            .participants
            .iter()
            .map(|p| AvatarSlot {
                initials: initials(&p.name),
                position_percent: participant_position(self.challenge, p),
            })
            .collect();
        TimelineTrack::new(&progress, &markers, &avatars, accent, self.theme)
            .virtual_width(track_virtual_width(progress.day_count()))
            .pan(self.pan)
            .render(Rect::new(inner.x, y, inner.width, TRACK_HEIGHT), buf);
        y += TRACK_HEIGHT;

        // Participant legend
        if y >= inner.y + inner.height {
            return;
        }
        let legend = self
            .participants
            .iter()
            .map(|p| format!("{} joined {}", p.name, short_date(p.join_date)))
            .collect::<Vec<_>>()
            .join("  \u{00b7}  ");
        let legend = if legend.is_empty() {
            "No participants yet".to_string()
        } else {
            fit_to_width(&legend, width)
        };
        let line = Line::from(Span::styled(legend, Style::default().fg(self.theme.muted)));
        Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
    }
}

/// Short month-day label, e.g. "Jul 8".
fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Up to two uppercase initials for an avatar chip.
fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().unwrap_or("");
    let picked: String = match words.next() {
        Some(second) => first.chars().take(1).chain(second.chars().take(1)).collect(),
        None => first.chars().take(2).collect(),
    };
    picked.to_uppercase()
}

/// Truncate a string to `max` display columns, adding ellipsis if needed.
fn fit_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}
