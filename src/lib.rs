//! # quiz-builder
//!
//! A terminal application for authoring multiple-choice quizzes, taking
//! them against a countdown and reviewing past scores.
//!
//! Quizzes and results live in an in-memory [`Store`] reached through the
//! asynchronous [`QuizApi`]; the bundled [`MockApi`] adds a fixed latency to
//! every call so the interface behaves like it talks to a remote backend.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_builder::{Config, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = Config::default().with_seed(Some("quizzes.json".into()));
//!     quiz_builder::run(config).await
//! }
//! ```

pub mod api;
pub mod app;
pub mod config;
mod data;
pub mod form;
mod input;
pub mod logging;
pub mod models;
pub mod optimistic;
pub mod session;
pub mod sort;
pub mod store;
pub mod terminal;
pub mod timer;
mod ui;

use std::io;
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc;

pub use api::{ApiError, MockApi, QuizApi};
pub use app::{App, AppEvent};
pub use config::Config;
pub use data::{LoadError, load_quizzes_from_json};
pub use models::{NewResult, Question, QuestionDraft, Quiz, QuizDraft, QuizResult, ValidationError};
pub use session::{Phase, SolveSession};
pub use store::{SharedStore, Store};

/// Error type for running the application.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load quizzes: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Run the application in the terminal until the user quits.
pub async fn run(config: Config) -> Result<(), QuizError> {
    let store = match &config.seed_path {
        Some(path) => Store::with_quizzes(load_quizzes_from_json(path)?),
        None => Store::new(),
    };
    log::info!("Starting with {} quizzes", store.quizzes().len());

    let api: Arc<dyn QuizApi> = Arc::new(MockApi::new(store.into_shared(), config.api_latency));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(api, tx, config.quiz_duration);
    app.open_list();

    let mut terminal = terminal::TerminalGuard::enter()?;
    let mut terminal_events = EventStream::new();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &app))?;

        tokio::select! {
            event = terminal_events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    input::handle_key(&mut app, key);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = rx.recv() => app.handle_event(event),
        }
    }

    log::info!("Shutting down");
    Ok(())
}
