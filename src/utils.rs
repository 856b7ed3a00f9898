//! Utility functions

use crate::constants::APP_NAME;
use chrono::NaiveTime;
use std::path::PathBuf;

// Square viewBox, for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="12" fill="#333333"/><g fill="#4a90e2"><circle cx="12" cy="14" r="4"/><circle cx="52" cy="12" r="3"/></g><circle cx="54" cy="50" r="4" fill="#e24ae2"/><circle cx="10" cy="52" r="3" fill="#e2e24a"/><circle cx="32" cy="8" r="2.5" fill="#4ae24a"/><path fill="#9765fb" d="M22 29h7v-7h6v7h7v6h-7v7h-6v-7h-7z"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image. `None` if the SVG or the
/// pixmap cannot be created.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory path (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Current wall-clock time in the local timezone
pub fn local_time() -> NaiveTime {
    chrono::Local::now().time()
}
