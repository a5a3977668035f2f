mod app;
mod input;
mod ui;

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use praonde_core::Session;
use ratatui::prelude::*;
use tracing::info;

pub use app::BrowseApp;

use crate::error::AppError;

pub fn run(session: Session) -> Result<(), AppError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = BrowseApp::new(session);
    info!("browse session started");

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let saved = app.session.liked().len();
    info!(saved, "browse session ended");
    if saved > 0 {
        println!("{} rolê(s) salvo(s) nesta sessão.", saved);
    }

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut BrowseApp,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        let event = event::read()?;
        input::handle_event(app, event);
    }

    Ok(())
}
