//! Centralized theme constants for Burst Counter
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const BG_ROW: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

// =============================================================================
// COLORS - Flash pulse
// =============================================================================
pub const FLASH_BASE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const FLASH_HIGHLIGHT: Color32 = Color32::from_rgb(151, 101, 251);

// =============================================================================
// COLORS - Accent (Blue)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x4a, 0x90, 0xe2);
pub const TITLE: Color32 = Color32::from_rgb(0x21, 0x96, 0xf3);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a);

// =============================================================================
// COLORS - Log list
// =============================================================================
pub const LOG_NEWEST: Color32 = Color32::from_rgb(0xe2, 0x4a, 0x4a);
pub const LOG_BORDER: Color32 = Color32::from_rgb(0x4a, 0x90, 0xe2);

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x2e);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 24.0;
pub const FONT_COUNTER: f32 = 18.0;
pub const FONT_LOG_NEWEST: f32 = 18.0;
pub const FONT_LOG: f32 = 16.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const COUNTER_WIDTH_FRACTION: f32 = 0.8;
pub const COUNTER_STAGE_HEIGHT: f32 = 50.0;
pub const BUTTON_SIZE: (f32, f32) = (140.0, 36.0);
pub const LOG_ROW_HEIGHT: f32 = 56.0;
pub const LOG_ROW_GAP: f32 = 12.0;

// =============================================================================
// CORNER RADIUS / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 5.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 15.0;
pub const SPACING_XL: f32 = 20.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ROW,
        extreme_bg_color: BG_BASE,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::NONE,
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Counter card frame
// =============================================================================
pub fn counter_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Log row frame
// =============================================================================
pub fn log_row_frame(border: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ROW)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, border))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(SPACING_LG as i8, 0))
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, dims + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (base_fill.gamma_multiply(0.7), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
