use super::*;
use crate::model::CATEGORIES;

impl QuizApp {
    pub fn is_fetch_pending(&self) -> bool {
        self.fetch_rx.is_some()
    }

    /// Display name of the configured category, for the configure view.
    pub fn category_label(&self) -> &'static str {
        match self.config.category {
            None => "Any Category",
            Some(id) => CATEGORIES
                .iter()
                .find(|(cat_id, _)| *cat_id == id)
                .map(|(_, name)| *name)
                .unwrap_or("Any Category"),
        }
    }

    pub fn difficulty_label(&self) -> &'static str {
        self.config
            .difficulty
            .map(|d| d.label())
            .unwrap_or("Any Difficulty")
    }

    pub fn kind_label(&self) -> &'static str {
        self.config
            .kind
            .map(|k| k.label())
            .unwrap_or("Any Type")
    }
}
