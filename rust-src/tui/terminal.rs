//! Terminal setup, teardown and the event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::dashboard::DashboardApp;


pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;


/// Initialize terminal for TUI
pub fn init_terminal() -> io::Result<TuiTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}


/// Restore terminal to normal state
pub fn restore_terminal(terminal: &mut TuiTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}


/// Draw and dispatch input until the app stops running.
pub fn run_event_loop(
    terminal: &mut TuiTerminal,
    app: &mut DashboardApp,
    tick_rate: Duration,
) -> io::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(tick_rate)? {
            app.handle_event(event::read()?);
        }
    }

    Ok(())
}
