use crate::app::{Action, App, Effect};
use crate::clipboard::SystemClipboard;
use crate::config::Settings;
use crate::input;
use crate::loader::{LoadEvent, Loader};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use review_client::ReviewClient;
use reviewer::{JsonFavoriteStore, ReviewIndex};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run_app(settings: Settings) -> anyhow::Result<()> {
    let client = ReviewClient::new(settings.source.clone(), settings.http_timeout)
        .context("Failed to build HTTP client")?
        .with_refresh_command(settings.refresh_command.clone());

    let store = JsonFavoriteStore::new(settings.data_dir.clone());
    let favorites_path = store.file_path();
    let index = ReviewIndex::new(Box::new(store))
        .with_context(|| format!("Failed to read favorites from {}", favorites_path.display()))?;

    let app = App::new(index, Box::new(SystemClipboard::default()));
    let (loader, events) = Loader::new(Arc::new(client));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_ui_loop(&mut terminal, app, loader, events).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Start the work an [`Effect`] asks for. Returns false on quit.
pub(crate) fn dispatch(effect: Effect, loader: &Loader) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return false,
        Effect::LoadReview(ticket, entry) => loader.spawn_review(ticket, entry),
        Effect::LoadCatalog(configuration) => loader.spawn_catalog(configuration),
    }
    true
}

async fn run_ui_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    loader: Loader,
    mut events: mpsc::UnboundedReceiver<LoadEvent>,
) -> anyhow::Result<()> {
    let mut term_events = EventStream::new();

    loader.spawn_catalog(None);

    loop {
        terminal.draw(|f| super::draw(f, &mut app))?;

        tokio::select! {
            biased;

            maybe_event = term_events.next() => {
                let action = match maybe_event {
                    Some(Ok(Event::Key(key))) => input::map_key(key, app.focus()),
                    Some(Ok(Event::Mouse(mouse))) => input::map_mouse(mouse, &app),
                    Some(Ok(_)) => None,
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                        None
                    }
                    None => return Ok(()),
                };
                if let Some(action) = action {
                    if action == Action::Quit {
                        tracing::info!("Quit requested");
                    }
                    if !dispatch(app.apply(action), &loader) {
                        return Ok(());
                    }
                }
            }

            Some(event) = events.recv() => {
                app.on_event(event);
                while let Ok(event) = events.try_recv() {
                    app.on_event(event);
                }
            }
        }
    }
}
