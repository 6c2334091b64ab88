//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use rustgen_app::config::Settings;
use rustgen_app::message::Message;
use rustgen_app::process;
use rustgen_app::signals;
use rustgen_app::state::AppState;
use rustgen_client::{GenerationService, HttpGenerationClient};
use rustgen_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI against the configured generation service
///
/// `source` replaces the default document in the JSON editor when given.
pub async fn run(settings: Settings, source: Option<String>) -> Result<()> {
    let service = Arc::new(HttpGenerationClient::new(
        &settings.service.endpoint,
        settings.service.timeout(),
    )?);
    info!("Using generation service at {}", service.schema_url());

    terminal::install_panic_hook();
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        warn!("{}", e);
    }

    let mut state = match source {
        Some(text) => AppState::with_source_text(settings, &text),
        None => AppState::with_settings(settings),
    };

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // SIGINT/SIGTERM arrive as Message::Shutdown
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, service);
    signal_task.abort();

    terminal::disable_paste();
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) -> Result<()>
where
    S: GenerationService + Sync + 'static,
{
    while !state.should_quit() {
        // Completions from generation tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &service);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, &service);
        }
    }

    info!("Exiting TUI");
    Ok(())
}
