use serde::{Deserialize, Serialize};

/// Question counts the configuration screen offers.
pub const QUESTION_AMOUNTS: [u8; 4] = [5, 10, 15, 20];

/// Category catalog of the Open Trivia Database. The ids are what the API
/// expects in the `category` query parameter.
pub const CATEGORIES: &[(u32, &str)] = &[
    (9, "General Knowledge"),
    (10, "Entertainment: Books"),
    (11, "Entertainment: Film"),
    (12, "Entertainment: Music"),
    (13, "Entertainment: Musicals & Theatres"),
    (14, "Entertainment: Television"),
    (15, "Entertainment: Video Games"),
    (16, "Entertainment: Board Games"),
    (17, "Science & Nature"),
    (18, "Science: Computers"),
    (19, "Science: Mathematics"),
    (20, "Mythology"),
    (21, "Sports"),
    (22, "Geography"),
    (23, "History"),
    (24, "Politics"),
    (25, "Art"),
    (26, "Celebrities"),
    (27, "Animals"),
    (28, "Vehicles"),
    (29, "Entertainment: Comics"),
    (30, "Science: Gadgets"),
    (31, "Entertainment: Japanese Anime & Manga"),
    (32, "Entertainment: Cartoon & Animations"),
];

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn api_value(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuestionKind {
    Multiple,
    Boolean,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 2] = [QuestionKind::Multiple, QuestionKind::Boolean];

    pub fn api_value(self) -> &'static str {
        match self {
            QuestionKind::Multiple => "multiple",
            QuestionKind::Boolean => "boolean",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::Multiple => "Multiple Choice",
            QuestionKind::Boolean => "True / False",
        }
    }
}

/// What the player picked on the configuration screen. `None` on a filter
/// means "any": the parameter is simply left out of the request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QuizConfig {
    pub amount: u8,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub kind: Option<QuestionKind>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            amount: QUESTION_AMOUNTS[0],
            category: None,
            difficulty: None,
            kind: None,
        }
    }
}

/// One trivia question exactly as delivered by the question source. Text
/// fields may carry HTML entities; see `crate::text::decode_entities`.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// Candidate answers for this question: the incorrect ones plus the
    /// correct one, sorted lexicographically. Sorting keeps the order stable
    /// across repaints and avoids leaking the correct answer's position.
    pub fn answer_set(&self) -> Vec<String> {
        let mut answers: Vec<String> = self
            .incorrect_answers
            .iter()
            .cloned()
            .chain(std::iter::once(self.correct_answer.clone()))
            .collect();
        answers.sort();
        answers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Configure,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Configure
    }
}

/// One play-through. All mutation goes through the methods below so the
/// score/index/selection invariants hold at a single point.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    selected: Option<String>,
    answered: bool,
}

impl Session {
    /// `questions` must be non-empty; the source layer rejects empty result
    /// lists before a session is ever built.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            selected: None,
            answered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// Sets or replaces the pending choice. Ignored once the question has
    /// been submitted, and for answers outside the current answer set.
    pub fn select(&mut self, answer: &str) {
        if self.answered {
            return;
        }
        if self
            .current_question()
            .answer_set()
            .iter()
            .any(|a| a == answer)
        {
            self.selected = Some(answer.to_owned());
        }
    }

    /// Grades the pending choice against the correct answer. Returns `false`
    /// without any state change when nothing is selected or the question was
    /// already submitted.
    pub fn submit(&mut self) -> bool {
        if self.answered {
            return false;
        }
        let Some(selected) = self.selected.as_deref() else {
            return false;
        };
        if selected == self.questions[self.current].correct_answer {
            self.score += 1;
        }
        self.answered = true;
        true
    }

    /// Whether the submitted choice was right. `None` until submission.
    pub fn was_correct(&self) -> Option<bool> {
        if !self.answered {
            return None;
        }
        Some(self.selected.as_deref() == Some(self.questions[self.current].correct_answer.as_str()))
    }

    /// Moves to the next question, clearing the selection and answered flag.
    /// Returns `false` when the answered question was the last one, i.e. the
    /// session is finished. Only meaningful after `submit`; calling it on an
    /// unanswered question is a no-op that reports "still playing".
    pub fn advance(&mut self) -> bool {
        if !self.answered {
            return true;
        }
        self.selected = None;
        self.answered = false;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_question() -> Question {
        Question {
            prompt: "What is the capital of Germany?".into(),
            correct_answer: "Berlin".into(),
            incorrect_answers: vec!["Paris".into(), "Rome".into()],
        }
    }

    #[test]
    fn answer_set_is_sorted_and_contains_correct_answer() {
        let q = capital_question();
        let answers = q.answer_set();
        assert_eq!(answers, vec!["Berlin", "Paris", "Rome"]);
        assert_eq!(answers.len(), q.incorrect_answers.len() + 1);
    }

    #[test]
    fn correct_submission_increments_score() {
        let mut session = Session::new(vec![capital_question()]);
        session.select("Berlin");
        assert!(session.submit());
        assert_eq!(session.score(), 1);
        assert!(session.answered());
        assert_eq!(session.was_correct(), Some(true));
    }

    #[test]
    fn wrong_submission_leaves_score_untouched() {
        let mut session = Session::new(vec![capital_question()]);
        session.select("Paris");
        assert!(session.submit());
        assert_eq!(session.score(), 0);
        assert!(session.answered());
        assert_eq!(session.was_correct(), Some(false));
        assert_eq!(session.selected(), Some("Paris"));
    }

    #[test]
    fn submit_without_selection_is_rejected() {
        let mut session = Session::new(vec![capital_question()]);
        assert!(!session.submit());
        assert!(!session.answered());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn submit_is_a_no_op_once_answered() {
        let mut session = Session::new(vec![capital_question()]);
        session.select("Berlin");
        assert!(session.submit());
        assert!(!session.submit());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn selecting_outside_the_answer_set_is_ignored() {
        let mut session = Session::new(vec![capital_question()]);
        session.select("Madrid");
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn reselecting_replaces_the_pending_choice() {
        let mut session = Session::new(vec![capital_question()]);
        session.select("Paris");
        session.select("Berlin");
        assert_eq!(session.selected(), Some("Berlin"));
        assert!(session.submit());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn selection_is_locked_after_submission() {
        let mut session = Session::new(vec![capital_question()]);
        session.select("Paris");
        assert!(session.submit());
        session.select("Berlin");
        assert_eq!(session.selected(), Some("Paris"));
    }

    #[test]
    fn single_question_session_finishes_after_advance() {
        let mut session = Session::new(vec![capital_question()]);
        session.select("Berlin");
        assert!(session.submit());
        assert!(!session.advance());
        assert_eq!(session.score(), 1);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn advance_moves_to_next_question_and_clears_state() {
        let mut session = Session::new(vec![capital_question(), capital_question()]);
        session.select("Rome");
        assert!(session.submit());
        assert!(session.advance());
        assert_eq!(session.index(), 1);
        assert!(!session.answered());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn advance_before_submission_does_nothing() {
        let mut session = Session::new(vec![capital_question(), capital_question()]);
        session.select("Berlin");
        assert!(session.advance());
        assert_eq!(session.index(), 0);
        assert_eq!(session.selected(), Some("Berlin"));
    }

    #[test]
    fn score_never_exceeds_questions_answered() {
        let mut session = Session::new(vec![capital_question(), capital_question()]);
        let mut previous = 0;
        loop {
            session.select("Berlin");
            session.submit();
            assert!(session.score() >= previous);
            assert!(session.score() as usize <= session.index() + 1);
            previous = session.score();
            if !session.advance() {
                break;
            }
        }
        assert_eq!(session.score(), 2);
    }
}
