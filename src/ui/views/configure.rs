use crate::QuizApp;
use crate::model::{CATEGORIES, Difficulty, QUESTION_AMOUNTS, QuestionKind};
use crate::ui::layout::{centered_panel, wide_button};
use egui::{ComboBox, Context};

pub fn ui_configure(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 380.0, 440.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Trivia Game");
        });
        ui.add_space(18.0);

        let combo_width = ui.available_width();

        ui.label("#️⃣ Number of Questions");
        ComboBox::from_id_salt("amount")
            .width(combo_width)
            .selected_text(app.config.amount.to_string())
            .show_ui(ui, |ui| {
                for n in QUESTION_AMOUNTS {
                    ui.selectable_value(&mut app.config.amount, n, n.to_string());
                }
            });
        ui.add_space(8.0);

        ui.label("🗃 Category");
        ComboBox::from_id_salt("category")
            .width(combo_width)
            .selected_text(app.category_label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.config.category, None, "Any Category");
                for (id, name) in CATEGORIES {
                    ui.selectable_value(&mut app.config.category, Some(*id), *name);
                }
            });
        ui.add_space(8.0);

        ui.label("📊 Difficulty");
        ComboBox::from_id_salt("difficulty")
            .width(combo_width)
            .selected_text(app.difficulty_label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.config.difficulty, None, "Any Difficulty");
                for difficulty in Difficulty::ALL {
                    ui.selectable_value(
                        &mut app.config.difficulty,
                        Some(difficulty),
                        difficulty.label(),
                    );
                }
            });
        ui.add_space(8.0);

        ui.label("✅ Type");
        ComboBox::from_id_salt("kind")
            .width(combo_width)
            .selected_text(app.kind_label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.config.kind, None, "Any Type");
                for kind in QuestionKind::ALL {
                    ui.selectable_value(&mut app.config.kind, Some(kind), kind.label());
                }
            });

        ui.add_space(16.0);

        let pending = app.is_fetch_pending();
        if wide_button(ui, !pending, "Start Trivia") {
            app.start_session();
        }

        if pending {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading questions...");
            });
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::LIGHT_RED, &app.message);
        }
    });
}
