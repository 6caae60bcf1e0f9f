use crate::model::{Question, QuizConfig};
use serde::Deserialize;
use std::fmt;

/// Base endpoint of the Open Trivia Database.
pub const API_ENDPOINT: &str = "https://opentdb.com/api.php";

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

/// Why a session could not be started. Every variant is recoverable: the
/// controller drops back to the configuration screen and the player can try
/// again with different settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStartError {
    /// The request did not complete: connection error, non-success HTTP
    /// status, or a body that was not the expected JSON.
    Transport(String),
    /// The source answered but signalled it cannot satisfy the request
    /// (any `response_code` other than 0).
    Service { code: u8 },
    /// The source reported success but returned no questions.
    NoResults,
}

impl fmt::Display for SessionStartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStartError::Transport(message) => write!(f, "transport failure: {message}"),
            SessionStartError::Service { code } => {
                write!(f, "question source reported response code {code}")
            }
            SessionStartError::NoResults => write!(f, "question source returned no questions"),
        }
    }
}

impl std::error::Error for SessionStartError {}

/// Builds the request URL. Filters are appended only when set; absence
/// means "any" on the source side.
pub fn build_url(config: &QuizConfig) -> String {
    let mut url = format!("{API_ENDPOINT}?amount={}", config.amount);
    if let Some(category) = config.category {
        url.push_str(&format!("&category={category}"));
    }
    if let Some(difficulty) = config.difficulty {
        url.push_str(&format!("&difficulty={}", difficulty.api_value()));
    }
    if let Some(kind) = config.kind {
        url.push_str(&format!("&type={}", kind.api_value()));
    }
    url
}

/// Shape check on the decoded body. A non-zero response code or an empty
/// result list both fail the start; no partial question list ever leaks
/// into a session.
fn questions_from_response(response: ApiResponse) -> Result<Vec<Question>, SessionStartError> {
    if response.response_code != 0 {
        return Err(SessionStartError::Service {
            code: response.response_code,
        });
    }
    if response.results.is_empty() {
        return Err(SessionStartError::NoResults);
    }
    Ok(response
        .results
        .into_iter()
        .map(|q| Question {
            prompt: q.question,
            correct_answer: q.correct_answer,
            incorrect_answers: q.incorrect_answers,
        })
        .collect())
}

/// Fetches one batch of questions. Exactly one request per call; no retry.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(config: &QuizConfig) -> Result<Vec<Question>, SessionStartError> {
    let url = build_url(config);
    let client = reqwest::blocking::Client::new();

    let response = client
        .get(&url)
        .send()
        .map_err(|err| SessionStartError::Transport(format!("request failed: {err}")))?;

    if !response.status().is_success() {
        return Err(SessionStartError::Transport(format!(
            "question source returned HTTP {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .map_err(|err| SessionStartError::Transport(format!("could not read body: {err}")))?;
    let decoded: ApiResponse = serde_json::from_str(&body)
        .map_err(|err| SessionStartError::Transport(format!("invalid JSON: {err}")))?;

    questions_from_response(decoded)
}

/// Fetches one batch of questions via the browser fetch API.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(config: &QuizConfig) -> Result<Vec<Question>, SessionStartError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let url = build_url(config);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|err| {
        SessionStartError::Transport(format!("could not create request: {err:?}"))
    })?;

    let window = web_sys::window()
        .ok_or_else(|| SessionStartError::Transport("no window in wasm environment".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| SessionStartError::Transport(format!("fetch failed: {err:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| SessionStartError::Transport("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(SessionStartError::Transport(format!(
            "question source returned HTTP {}",
            response.status()
        )));
    }

    let text_promise = response
        .text()
        .map_err(|err| SessionStartError::Transport(format!("could not read body: {err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| SessionStartError::Transport(format!("could not read body: {err:?}")))?
        .as_string()
        .ok_or_else(|| SessionStartError::Transport("response body is not text".into()))?;

    let decoded: ApiResponse = serde_json::from_str(&text)
        .map_err(|err| SessionStartError::Transport(format!("invalid JSON: {err}")))?;

    questions_from_response(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionKind};

    #[test]
    fn build_url_with_amount_only() {
        let config = QuizConfig {
            amount: 5,
            ..QuizConfig::default()
        };
        assert_eq!(build_url(&config), "https://opentdb.com/api.php?amount=5");
    }

    #[test]
    fn build_url_appends_each_filter_only_when_set() {
        let config = QuizConfig {
            amount: 10,
            category: Some(18),
            difficulty: Some(Difficulty::Hard),
            kind: Some(QuestionKind::Boolean),
        };
        assert_eq!(
            build_url(&config),
            "https://opentdb.com/api.php?amount=10&category=18&difficulty=hard&type=boolean"
        );

        let partial = QuizConfig {
            amount: 10,
            difficulty: Some(Difficulty::Easy),
            ..QuizConfig::default()
        };
        assert_eq!(
            build_url(&partial),
            "https://opentdb.com/api.php?amount=10&difficulty=easy"
        );
    }

    #[test]
    fn successful_response_yields_questions_in_source_order() {
        let body = r#"{
            "response_code": 0,
            "results": [
                {
                    "question": "What is the capital of Germany?",
                    "correct_answer": "Berlin",
                    "incorrect_answers": ["Paris", "Rome"]
                },
                {
                    "question": "The Earth is flat.",
                    "correct_answer": "False",
                    "incorrect_answers": ["True"]
                }
            ]
        }"#;
        let decoded: ApiResponse = serde_json::from_str(body).unwrap();
        let questions = questions_from_response(decoded).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_answer, "Berlin");
        assert_eq!(questions[1].prompt, "The Earth is flat.");
    }

    #[test]
    fn non_zero_response_code_is_a_service_error() {
        let body = r#"{"response_code": 1, "results": []}"#;
        let decoded: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            questions_from_response(decoded),
            Err(SessionStartError::Service { code: 1 })
        );
    }

    #[test]
    fn empty_or_missing_results_fail_the_start() {
        let empty: ApiResponse =
            serde_json::from_str(r#"{"response_code": 0, "results": []}"#).unwrap();
        assert_eq!(
            questions_from_response(empty),
            Err(SessionStartError::NoResults)
        );

        let missing: ApiResponse = serde_json::from_str(r#"{"response_code": 0}"#).unwrap();
        assert_eq!(
            questions_from_response(missing),
            Err(SessionStartError::NoResults)
        );
    }
}
