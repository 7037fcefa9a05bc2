//! streakline-tui: Terminal dashboard for habit challenges
//!
//! This crate is the presentation layer over `streakline-engine`: it turns
//! the engine's layout values (progress fractions, day markers, avatar
//! positions) into challenge cards with a pannable timeline, plus a footer
//! carrying the motivational message. The engine never learns about
//! terminals; this crate never does date math of its own.

mod app;
mod event;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use streakline_engine;
pub use theme::Theme;

use chrono::NaiveDate;
use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use streakline_engine::Dataset;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the dashboard for a dataset as of `today`.
///
/// This is the main entry point for the TUI. It sets up the terminal, runs
/// the event loop, and restores the terminal on exit.
pub async fn run_tui(dataset: Dataset, today: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(dataset, today);
    let size = terminal.size()?;
    app.auto_pan(size.width);

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            app.render(area, buf);
        })?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    app.handle_action(key_to_action(key));
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.handle_action(Action::Up),
                    MouseEventKind::ScrollDown => app.handle_action(Action::Down),
                    _ => {}
                },
                Event::Resize(width, _) => {
                    app.set_viewport(width);
                }
                Event::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
