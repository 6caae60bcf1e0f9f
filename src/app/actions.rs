use super::*;
use crate::model::Session;
use crate::source;

/// Shown for both transport and semantic failures; the log line carries the
/// distinction for diagnostics.
const START_FAILED_MESSAGE: &str = "Could not start trivia. Try different settings.";

impl QuizApp {
    /// Kicks off the one network call that turns the current configuration
    /// into a session. The fetch runs off the UI thread and reports back
    /// through a channel drained by `poll_fetch_result`; at most one request
    /// is in flight at a time.
    pub fn start_session(&mut self) {
        if self.fetch_rx.is_some() {
            return;
        }
        self.message.clear();

        let config = self.config.clone();
        let (tx, rx) = std::sync::mpsc::channel::<FetchResult>();
        self.fetch_rx = Some(rx);

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(source::fetch_questions(&config));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(source::fetch_questions(&config).await);
        });
    }

    /// Called every frame. Resumes the controller exactly once per fetch,
    /// with either outcome.
    pub fn poll_fetch_result(&mut self) {
        let result = match self.fetch_rx.as_ref().and_then(|rx| rx.try_recv().ok()) {
            Some(result) => result,
            None => return,
        };
        self.fetch_rx = None;
        self.apply_fetch_result(result);
    }

    fn apply_fetch_result(&mut self, result: FetchResult) {
        match result {
            Ok(questions) => {
                log::info!("session started with {} questions", questions.len());
                self.session = Some(Session::new(questions));
                self.message.clear();
                self.state = AppState::Quiz;
            }
            Err(err) => {
                log::warn!("session start failed: {err}");
                self.session = None;
                self.message = START_FAILED_MESSAGE.to_owned();
                self.state = AppState::Configure;
            }
        }
    }

    pub fn select_answer(&mut self, answer: &str) {
        if let Some(session) = self.session.as_mut() {
            session.select(answer);
        }
    }

    pub fn submit_answer(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.submit() {
            return;
        }
        self.message = match session.was_correct() {
            Some(true) => "✅ Correct!".to_owned(),
            _ => "❌ Incorrect.".to_owned(),
        };
    }

    pub fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.message.clear();
        if !session.advance() {
            self.state = AppState::Summary;
        }
    }

    /// Drops the session entirely and returns to the configuration screen.
    /// The configuration itself is kept as the new defaults.
    pub fn restart(&mut self) {
        self.session = None;
        self.message.clear();
        self.state = AppState::Configure;
    }
}
