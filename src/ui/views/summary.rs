use crate::QuizApp;
use crate::model::AppState;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Context, RichText};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let Some((score, total)) = app.session.as_ref().map(|s| (s.score(), s.len())) else {
        app.state = AppState::Configure;
        return;
    };

    let mut play_again = false;

    centered_panel(ctx, 240.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Quiz Finished 🎉");
            ui.add_space(12.0);
            ui.label(RichText::new(format!("Score: {score} / {total}")).size(18.0).strong());
            ui.add_space(18.0);
        });
        if wide_button(ui, true, "Play Again") {
            play_again = true;
        }
    });

    if play_again {
        app.restart();
    }
}
