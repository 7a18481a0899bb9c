// TUI event loop and terminal management
use crate::{App, Controller};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use shopfront_cache::KeyValueStore;
use shopfront_core::{AppContext, CatalogSource};
use std::io;
use tracing::info;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the storefront until the user quits
///
/// The catalog is loaded after the first frame so the user sees a loading
/// state instead of a frozen terminal.
pub async fn run_tui<K: KeyValueStore>(
    ctx: &mut AppContext<K>,
    source: &dyn CatalogSource,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, ctx, source).await;

    // Restore terminal even if the loop bailed out
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<K: KeyValueStore>(
    terminal: &mut Tui,
    ctx: &mut AppContext<K>,
    source: &dyn CatalogSource,
) -> anyhow::Result<()> {
    let mut app = App::new();
    terminal.draw(|f| crate::ui::render(f, &mut app))?;

    // A failed load is already recorded in the catalog state and gets drawn
    let _ = ctx.catalog.load(source).await;
    app.loading = false;
    Controller::new(ctx, &mut app).show_catalog();

    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = app.handle_key(key) {
                Controller::new(ctx, &mut app).activate(action);
            }
        }

        if app.should_quit {
            info!("Bye");
            break;
        }
    }

    Ok(())
}
