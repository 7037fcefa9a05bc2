//! Footer bar widget.
//!
//! Minimal format: `<motivational message>            [keys] action │ ...`
//! The message comes from the genuine average progress across all loaded
//! challenges, not an assumed constant.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "q", "↑/↓").
    pub key: String,
    /// The action description (e.g., "quit", "select").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer bar widget.
pub struct Footer<'a> {
    message: &'a str,
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer.
    pub fn new(message: &'a str, hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            message,
            hints,
            theme,
        }
    }

    /// Default hints for the dashboard.
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("\u{2191}/\u{2193}", "select"),
            KeyHint::new("\u{2190}/\u{2192}", "pan"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = vec![Span::styled(
            self.message,
            Style::default().fg(self.theme.primary),
        )];

        // Right side: hints
        let mut right_spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(
                    " \u{2502} ",
                    Style::default().fg(self.theme.muted),
                ));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                &hint.key,
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                &hint.action,
                Style::default().fg(self.theme.subtext),
            ));
        }

        // Pad between message and hints
        let left_width: usize = left_spans.iter().map(|s| s.content.len()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.len()).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        let line = Line::from(left_spans);
        Paragraph::new(line)
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}
