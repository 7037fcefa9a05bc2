//! Catppuccin color palette for the TUI.
//!
//! Challenge cards cycle through `accents` the way the web dashboard cycled
//! its three brand colors (orange/teal/violet -> peach/teal/mauve).

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Per-challenge accent cycle
    pub accents: [Color; 3],

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244

            // Foregrounds
            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            // Accents
            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            // Per-challenge accent cycle
            accents: [
                Color::Rgb(250, 179, 135), // #fab387 (peach)
                Color::Rgb(148, 226, 213), // #94e2d5 (teal)
                Color::Rgb(203, 166, 247), // #cba6f7 (mauve)
            ],

            // Borders
            border: Color::Rgb(69, 71, 90),             // #45475a
            border_focused: Color::Rgb(180, 190, 254),  // #b4befe (lavender)
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            // Backgrounds (inverted for light theme)
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            // Foregrounds
            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            // Accents
            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)

            // Per-challenge accent cycle
            accents: [
                Color::Rgb(254, 100, 11), // #fe640b (peach)
                Color::Rgb(23, 146, 153), // #179299 (teal)
                Color::Rgb(136, 57, 239), // #8839ef (mauve)
            ],

            // Borders
            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd (lavender)
        }
    }

    /// Accent color for a challenge by its display index, cycling like the
    /// original dashboard's color list.
    pub fn accent(&self, index: usize) -> Color {
        self.accents[index % self.accents.len()]
    }
}
