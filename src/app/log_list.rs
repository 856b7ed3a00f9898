//! Log list, newest entry first

use super::App;
use crate::scene::log_row_style;
use crate::theme;
use eframe::egui;

impl App {
    pub(crate) fn render_log_list(&self, ui: &mut egui::Ui) {
        let log = &self.screen.log;
        if log.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_XL);
                ui.label(
                    egui::RichText::new("Press Increment to start the log")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
            });
            return;
        }

        // Only visible rows are laid out
        let row_h = theme::LOG_ROW_HEIGHT + theme::LOG_ROW_GAP;
        ui.spacing_mut().item_spacing.y = 0.0;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_h, log.len(), |ui, range| {
                for index in range {
                    let entry = &log[index];
                    let style = log_row_style(index);
                    ui.add_space(theme::LOG_ROW_GAP / 2.0);
                    theme::log_row_frame(style.border).show(ui, |ui| {
                        // frame stroke sits inside the row height
                        let inner_h = theme::LOG_ROW_HEIGHT - theme::STROKE_DEFAULT * 2.0;
                        ui.allocate_ui_with_layout(
                            egui::vec2(ui.available_width(), inner_h),
                            egui::Layout::left_to_right(egui::Align::Center),
                            |ui| {
                                ui.set_min_size(egui::vec2(ui.available_width(), inner_h));
                                let mut text = egui::RichText::new(entry.to_string())
                                    .size(style.font_size)
                                    .color(style.text);
                                if style.strong {
                                    text = text.strong();
                                }
                                ui.add(egui::Label::new(text).selectable(false));
                            },
                        );
                    });
                    ui.add_space(theme::LOG_ROW_GAP / 2.0);
                }
            });
    }
}
