mod components;
mod keymap;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::mem::discriminant;
use std::time::Duration;

use stocklet_core::{App, Repository, Screen};

/// Renderer-local list cursor. This is browse state only; the chosen
/// checkout item lives in the controller's view state.
#[derive(Debug, Default)]
pub(crate) struct Cursor {
    pub index: usize,
}

pub fn run<R: Repository>(mut app: App<R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut cursor = Cursor::default();
    let mut last_screen_kind = discriminant(&app.render());

    let poll_timeout = Duration::from_millis(250);

    // One key event is fully processed before the next is read; the
    // controller serializes every state mutation.
    while app.is_running() {
        let screen = app.render();

        let kind = discriminant(&screen);
        if kind != last_screen_kind {
            cursor.index = 0;
            last_screen_kind = kind;
        }
        clamp_cursor(&mut cursor, &screen);

        terminal.draw(|f| ui::draw(f, &screen, &cursor))?;

        if event::poll(poll_timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = keymap::handle_key(&screen, &mut cursor, key)
        {
            app.dispatch(action);
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn clamp_cursor(cursor: &mut Cursor, screen: &Screen) {
    let len = keymap::list_len(screen);
    if len == 0 {
        cursor.index = 0;
    } else if cursor.index >= len {
        cursor.index = len - 1;
    }
}
