use crate::QuizApp;
use crate::model::AppState;
use crate::text::decode_entities;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Color32, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // No live session means the state got out of sync; fall back to the
    // configuration screen instead of indexing into nothing.
    let Some(session) = app.session.as_ref() else {
        app.state = AppState::Configure;
        return;
    };

    let total = session.len();
    let number = session.index() + 1;
    let score = session.score();
    let answered = session.answered();
    let is_last = session.is_last();
    let selected = session.selected().map(str::to_owned);
    let question = session.current_question();
    let prompt = decode_entities(&question.prompt);
    let correct = question.correct_answer.clone();
    let answers = question.answer_set();

    let mut picked: Option<String> = None;
    let mut submit = false;
    let mut advance = false;

    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.horizontal(|ui| {
            ui.heading(format!("Question {number} / {total}"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("Score: {score}")).strong());
            });
        });
        ui.add_space(10.0);

        ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
            ui.label(RichText::new(&prompt).size(16.0));
        });
        ui.add_space(12.0);

        for answer in &answers {
            let text = decode_entities(answer);
            if answered {
                // Mark the correct answer and, if the pick was wrong, the
                // player's choice.
                if *answer == correct {
                    ui.colored_label(Color32::LIGHT_GREEN, format!("✅ {text}"));
                } else if selected.as_deref() == Some(answer.as_str()) {
                    ui.colored_label(Color32::LIGHT_RED, format!("❌ {text}"));
                } else {
                    ui.label(text);
                }
            } else {
                let checked = selected.as_deref() == Some(answer.as_str());
                if ui.radio(checked, text).clicked() {
                    picked = Some(answer.clone());
                }
            }
            ui.add_space(4.0);
        }

        ui.add_space(12.0);

        if answered {
            let label = if is_last { "See results" } else { "Next question" };
            if wide_button(ui, true, label) {
                advance = true;
            }
        } else if wide_button(ui, selected.is_some(), "Submit Answer") {
            submit = true;
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });

    if let Some(answer) = picked {
        app.select_answer(&answer);
    }
    if submit {
        app.submit_answer();
    }
    if advance {
        app.next_question();
    }
}
