//! Reusable UI components
//!
//! Standalone widgets used by the counter card and the header.

use crate::theme;
use eframe::egui;

/// Custom-painted primary button with an icon and hover/press feedback
pub fn increment_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    let size = egui::vec2(theme::BUTTON_SIZE.0, theme::BUTTON_SIZE.1);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, theme::ACCENT, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{}  {}", egui_phosphor::regular::PLUS, label),
            egui::FontId::proportional(15.0),
            theme::TEXT_PRIMARY,
        );
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response
}

/// Pill-style toggle over a fixed set of options. Returns the newly picked
/// index when the selection changed.
pub fn segmented_toggle(ui: &mut egui::Ui, labels: &[&str], active: usize) -> Option<usize> {
    if labels.is_empty() {
        return None;
    }
    let segment_w = 64.0;
    let height = 24.0;
    let rounding = 4.0;
    let total = egui::vec2(segment_w * labels.len() as f32, height);

    let (rect, response) = ui.allocate_exact_size(total, egui::Sense::click());
    let painter = ui.painter();
    painter.rect_filled(rect, rounding + 2.0, theme::BG_ROW);

    for (i, label) in labels.iter().enumerate() {
        let seg = egui::Rect::from_min_size(
            egui::pos2(rect.min.x + segment_w * i as f32, rect.min.y),
            egui::vec2(segment_w, height),
        );
        let color = if i == active {
            painter.rect_filled(seg.shrink(2.0), rounding, theme::ACCENT);
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_MUTED
        };
        painter.text(
            seg.center(),
            egui::Align2::CENTER_CENTER,
            *label,
            egui::FontId::proportional(theme::FONT_SMALL),
            color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let picked = (((pos.x - rect.min.x) / segment_w) as usize).min(labels.len() - 1);
            if picked != active {
                return Some(picked);
            }
        }
    }
    None
}
