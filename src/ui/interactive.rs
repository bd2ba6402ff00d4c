//! Interactive UI loop
//!
//! The users fetch runs as a background task while the loop keeps polling
//! input, so the spinner animates and the app can be quit before the list
//! arrives.

use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use tokio::task::JoinHandle;

use super::event_handler::{EventResult, handle_key_event};
use super::render::render;
use super::state::LoadState;
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::config::Config;
use crate::constants::ui::{EVENT_POLL_MS, SPINNER_FRAME_MS};
use crate::data_fetcher::{UserWithNameMeta, fetch_users_with_config};
use crate::error::AppError;

type FetchTask = JoinHandle<Result<Vec<UserWithNameMeta>, AppError>>;

/// Runs the searchable user picker until the user quits.
///
/// The terminal is restored even when the loop itself fails.
pub async fn run_interactive_ui(config: Config, debug_mode: bool) -> Result<(), AppError> {
    let terminal = TerminalManager::with_config(TerminalConfig { debug_mode });
    let mut stdout = terminal.setup_terminal()?;

    let result = event_loop(&mut stdout, config).await;

    let cleanup = terminal.cleanup_terminal(stdout);
    result.and(cleanup)
}

async fn event_loop(stdout: &mut Stdout, config: Config) -> Result<(), AppError> {
    let mut state = LoadState::loading();
    let mut fetch_task: Option<FetchTask> = Some(tokio::spawn(async move {
        fetch_users_with_config(&config).await
    }));
    let mut last_frame = Instant::now();
    let mut needs_render = true;

    let result = loop {
        if fetch_task.as_ref().is_some_and(|task| task.is_finished())
            && let Some(task) = fetch_task.take()
        {
            state = match task.await {
                Ok(fetch_result) => LoadState::from_fetch_result(fetch_result),
                Err(e) => {
                    tracing::error!("Users fetch task failed: {e}");
                    LoadState::Failed(format!("fetch task failed: {e}"))
                }
            };
            needs_render = true;
        }

        if let LoadState::Loading(indicator) = &mut state
            && last_frame.elapsed() >= Duration::from_millis(SPINNER_FRAME_MS)
        {
            indicator.next_frame();
            last_frame = Instant::now();
            needs_render = true;
        }

        if needs_render {
            if let Err(e) = render(stdout, &state) {
                break Err(e);
            }
            needs_render = false;
        }

        match event::poll(Duration::from_millis(EVENT_POLL_MS)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => break Err(e.into()),
        }

        match event::read() {
            Ok(Event::Key(key_event)) => match handle_key_event(&mut state, &key_event) {
                EventResult::Exit => break Ok(()),
                EventResult::Handled => needs_render = true,
                EventResult::Continue => {}
            },
            Ok(Event::Resize(width, height)) => {
                tracing::debug!("Terminal resized to {width}x{height}");
                needs_render = true;
            }
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
    };

    if let Some(task) = fetch_task.take() {
        tracing::debug!("Aborting unfinished users fetch");
        task.abort();
    }

    result
}
