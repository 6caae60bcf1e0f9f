use crate::model::{AppState, Question, QuizConfig, Session};
use crate::source::SessionStartError;
use std::sync::mpsc::Receiver;

pub mod actions;
pub mod queries;

pub type FetchResult = Result<Vec<Question>, SessionStartError>;

/// The whole controller state. The session is owned here and mutated only
/// through its own methods; the views read it and report clicks back as
/// method calls on this struct.
pub struct QuizApp {
    /// Kept across restarts so the previous settings come back as defaults.
    pub config: QuizConfig,
    pub session: Option<Session>,
    pub message: String,
    pub state: AppState,
    /// Receiving end of the one in-flight fetch, if any. The sender lives on
    /// the worker; `poll_fetch_result` drains it once per outcome.
    fetch_rx: Option<Receiver<FetchResult>>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            config: QuizConfig::default(),
            session: None,
            message: String::new(),
            state: AppState::Configure,
            fetch_rx: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
