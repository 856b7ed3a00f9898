//! Counter card: flash background, floating labels, particle burst, button

use super::App;
use crate::scene::Scene;
use crate::theme;
use crate::ui::components::increment_button;
use eframe::egui;
use std::time::Instant;

impl App {
    pub(crate) fn render_counter_card(&mut self, ui: &mut egui::Ui, now: Instant) {
        let scene = Scene::build(&self.screen);
        let card_w = ui.available_width() * theme::COUNTER_WIDTH_FRACTION;

        ui.vertical_centered(|ui| {
            theme::counter_frame(scene.background).show(ui, |ui| {
                ui.set_width(card_w - theme::SPACING_LG * 2.0);

                let (stage, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), theme::COUNTER_STAGE_HEIGHT),
                    egui::Sense::hover(),
                );
                // effects may leave the stage but not the card
                let painter = ui.painter_at(stage.expand(theme::SPACING_LG));
                paint_stage(&painter, stage, &scene);

                ui.add_space(theme::SPACING_MD);
                if increment_button(ui, "Increment").clicked() {
                    self.press(now);
                }
            });
        });
    }
}

fn paint_stage(painter: &egui::Painter, stage: egui::Rect, scene: &Scene) {
    painter.text(
        stage.center_top() + egui::vec2(0.0, 4.0),
        egui::Align2::CENTER_TOP,
        &scene.counter_text,
        egui::FontId::proportional(theme::FONT_COUNTER),
        theme::TEXT_PRIMARY,
    );

    for label in &scene.labels {
        painter.text(
            stage.center_top() - egui::vec2(0.0, label.rise),
            egui::Align2::CENTER_TOP,
            "+1",
            egui::FontId::proportional(label.font_size),
            theme::ACCENT.gamma_multiply(label.opacity),
        );
    }

    for particle in &scene.particles {
        let center = egui::pos2(
            stage.min.x + stage.width() * particle.center.x / 100.0,
            stage.min.y + stage.height() * particle.center.y / 100.0,
        );
        painter.circle_filled(center, particle.diameter / 2.0, particle.color);
    }
}
