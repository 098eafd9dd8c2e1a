use std::io::Stdout;
use std::io::stdout;

use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::backend::CrosstermBackend;

pub(crate) type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode on the alternate screen. Terminal state is restored on
/// panic as well as by [`restore`].
pub(crate) fn init(mouse: bool) -> std::io::Result<Terminal> {
    enable_raw_mode()?;
    match enter(mouse) {
        Ok(terminal) => {
            set_panic_hook();
            Ok(terminal)
        }
        Err(err) => {
            let _ = restore();
            Err(err)
        }
    }
}

fn enter(mouse: bool) -> std::io::Result<Terminal> {
    execute!(stdout(), EnterAlternateScreen)?;
    if mouse {
        execute!(stdout(), EnableMouseCapture)?;
    }
    let mut terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

pub(crate) fn restore() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}
