#![windows_subsystem = "windows"]
//! Burst Counter - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod animation;
mod app;
mod constants;
mod random;
mod scene;
mod settings;
mod state;
mod theme;
mod ticker;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use std::time::Instant;
use tracing::{info, warn};
use types::Variant;
use ui::components::segmented_toggle;
use utils::get_data_dir;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "burst-counter.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,burst_counter=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Burst Counter starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(420.0, 760.0)))
        .with_min_inner_size([320.0, 560.0])
        .with_title(APP_NAME);

    match utils::rasterize_icon(64) {
        Some((rgba, width, height)) => {
            let icon = egui::IconData { rgba, width, height };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        None => warn!("Failed to rasterize window icon"),
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Space / Enter act like the button unless a widget has focus (it
        // already reacts to those keys itself)
        if self.keyboard_shortcuts
            && !ctx.wants_keyboard_input()
            && ctx.memory(|m| m.focused().is_none())
        {
            let presses = ctx.input(|i| app::shortcut_presses(&i.events));
            for _ in 0..presses {
                self.press(now);
            }
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(12, 20)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(APP_NAME)
                                .size(theme::FONT_TITLE)
                                .strong()
                                .color(theme::TITLE),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_MD);

                    let labels: Vec<&str> = Variant::ALL.iter().map(|v| v.label()).collect();
                    let active = Variant::ALL
                        .iter()
                        .position(|v| *v == self.screen.variant)
                        .unwrap_or(0);
                    if let Some(picked) = segmented_toggle(ui, &labels, active) {
                        self.set_variant(Variant::ALL[picked]);
                    }
                });

                ui.add_space(theme::SPACING_XL);
                self.render_counter_card(ui, now);
                ui.add_space(theme::SPACING_XL);
                self.render_log_list(ui);
            });

        self.drive_animation(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(count = self.screen.count, "Burst Counter exiting");
        self.save_settings();
    }
}
