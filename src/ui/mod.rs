pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // The fetch worker reports back through a channel; keep repainting
        // while it is pending so the result is picked up promptly.
        self.poll_fetch_result();
        if self.is_fetch_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        if matches!(self.state, AppState::Quiz | AppState::Summary) {
            top_panel(self, ctx);
        }
        bottom_panel(ctx);

        match self.state {
            AppState::Configure => views::configure::ui_configure(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary_view(self, ctx),
        }
    }
}
