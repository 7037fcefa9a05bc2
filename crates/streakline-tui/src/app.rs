//! Application state and dashboard rendering.
//!
//! `App` owns the loaded dataset, the pinned "today", and the interaction
//! state: which card is selected, how far each timeline is panned, and
//! whether the help overlay is open. Rendering is a pure function of this
//! state, which keeps the tests backend-free.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use streakline_engine::{average_progress, challenge_progress, motivational_message, Dataset};

use crate::event::Action;
use crate::theme::Theme;
use crate::widgets::{track_virtual_width, ChallengeCard, Footer, HelpOverlay, CARD_HEIGHT};

/// Columns moved per pan step.
const PAN_STEP: u16 = 4;

/// Dashboard application state.
pub struct App {
    /// Loaded challenges and participants.
    pub dataset: Dataset,

    /// The date progress is computed against; pinned at startup.
    pub today: NaiveDate,

    /// Color palette.
    pub theme: Theme,

    /// Index of the selected challenge card.
    pub selected: usize,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Whether the app should exit.
    pub should_quit: bool,

    /// Per-challenge timeline pan offsets.
    pans: Vec<u16>,

    /// Last known terminal width, used to clamp panning.
    viewport: u16,
}

impl App {
    /// Create the app for a dataset as of `today`.
    pub fn new(dataset: Dataset, today: NaiveDate) -> Self {
        let pans = vec![0; dataset.challenges.len()];
        Self {
            dataset,
            today,
            theme: Theme::default(),
            selected: 0,
            show_help: false,
            should_quit: false,
            pans,
            viewport: 80,
        }
    }

    /// Record the terminal width and pan each timeline so the view starts
    /// centered near current progress, like the original dashboard's
    /// auto-scroll on load.
    pub fn auto_pan(&mut self, viewport: u16) {
        self.viewport = viewport;
        for index in 0..self.pans.len() {
            let progress = challenge_progress(&self.dataset.challenges[index], self.today);
            let max = self.max_pan(index);
            self.pans[index] = (f64::from(max) * progress.fraction * 0.5).round() as u16;
        }
    }

    /// Update the cached terminal width after a resize.
    pub fn set_viewport(&mut self, viewport: u16) {
        self.viewport = viewport;
    }

    /// Pan offset of the selected timeline.
    pub fn selected_pan(&self) -> u16 {
        self.pans.get(self.selected).copied().unwrap_or(0)
    }

    /// Columns available to a card's timeline (borders eat one per side).
    fn track_width(&self) -> u16 {
        self.viewport.saturating_sub(2)
    }

    /// Rightmost useful pan offset for a challenge's timeline.
    fn max_pan(&self, index: usize) -> u16 {
        let Some(challenge) = self.dataset.challenges.get(index) else {
            return 0;
        };
        let progress = challenge_progress(challenge, self.today);
        track_virtual_width(progress.day_count()).saturating_sub(self.track_width())
    }

    /// Apply a user action to the state.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit | Action::Back => {
                // Help closes before the app quits
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::Up => self.selected = self.selected.saturating_sub(1),
            Action::Down => {
                if self.selected + 1 < self.dataset.challenges.len() {
                    self.selected += 1;
                }
            }
            Action::Left => {
                if let Some(pan) = self.pans.get_mut(self.selected) {
                    *pan = pan.saturating_sub(PAN_STEP);
                }
            }
            Action::Right => {
                let max = self.max_pan(self.selected);
                if let Some(pan) = self.pans.get_mut(self.selected) {
                    *pan = (*pan + PAN_STEP).min(max);
                }
            }
            Action::PanStart => {
                if let Some(pan) = self.pans.get_mut(self.selected) {
                    *pan = 0;
                }
            }
            Action::PanEnd => {
                let max = self.max_pan(self.selected);
                if let Some(pan) = self.pans.get_mut(self.selected) {
                    *pan = max;
                }
            }
            Action::None => {}
        }
    }

    /// Render the dashboard into the buffer.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(self.theme.base))
            .render(area, buf);
        if area.height < 2 {
            return;
        }

        let footer_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let cards_area = Rect::new(area.x, area.y, area.width, area.height - 1);

        if self.dataset.is_empty() {
            let empty = Line::from(Span::styled(
                "No challenges loaded",
                Style::default().fg(self.theme.muted),
            ));
            Paragraph::new(empty).render(
                Rect::new(
                    cards_area.x + 2,
                    cards_area.y + cards_area.height / 2,
                    cards_area.width.saturating_sub(4),
                    1,
                ),
                buf,
            );
        } else {
            // Keep the selected card on screen
            let per_page = usize::from(cards_area.height / CARD_HEIGHT).max(1);
            let first = if self.selected >= per_page {
                self.selected + 1 - per_page
            } else {
                0
            };

            let mut y = cards_area.y;
            for (index, challenge) in self.dataset.challenges.iter().enumerate().skip(first) {
                if y + CARD_HEIGHT > cards_area.y + cards_area.height {
                    break;
                }
                let participants = self.dataset.participants_for(&challenge.id);
                ChallengeCard::new(challenge, &participants, self.today, index, &self.theme)
                    .selected(index == self.selected)
                    .pan(self.pans.get(index).copied().unwrap_or(0))
                    .render(Rect::new(cards_area.x, y, cards_area.width, CARD_HEIGHT), buf);
                y += CARD_HEIGHT;
            }
        }

        let message = motivational_message(average_progress(&self.dataset.challenges, self.today));
        let hints = Footer::default_hints();
        Footer::new(message, &hints, &self.theme).render(footer_area, buf);

        if self.show_help {
            HelpOverlay::new(&self.theme).render(area, buf);
        }
    }
}
