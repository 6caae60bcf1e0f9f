use crate::QuizApp;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 New game").clicked() {
                app.restart();
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centered both vertically and horizontally, with a maximum content
/// width and an inner content block.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Full-width button with the standard height used across the views.
pub fn wide_button(ui: &mut Ui, enabled: bool, label: &str) -> bool {
    let width = ui.available_width();
    ui.add_enabled(enabled, Button::new(label).min_size(egui::vec2(width, 36.0)))
        .clicked()
}
