//! Help overlay widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::Theme;

/// Modal overlay listing the dashboard keys.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn entries() -> [(&'static str, &'static str); 6] {
        [
            ("\u{2191}/\u{2193}, j/k", "Select challenge"),
            ("\u{2190}/\u{2192}, h/l", "Pan timeline"),
            ("Home/End, g/G", "Jump to timeline edge"),
            ("?", "Toggle this help"),
            ("Esc", "Close help / quit"),
            ("q", "Quit"),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 44.min(area.width);
        let height = (Self::entries().len() as u16 + 2).min(area.height);
        let popup = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        Clear.render(popup, buf);
        let block = Block::default()
            .title(" Keys ")
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.surface));
        let inner = block.inner(popup);
        block.render(popup, buf);

        for (i, (key, action)) in Self::entries().into_iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let line = Line::from(vec![
                Span::styled(
                    format!(" {key:<14}"),
                    Style::default().fg(self.theme.primary),
                ),
                Span::styled(action, Style::default().fg(self.theme.text)),
            ]);
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}
