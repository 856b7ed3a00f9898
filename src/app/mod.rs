//! App module - contains the main application state and logic

mod counter;
mod log_list;

use crate::random::XorShift;
use crate::settings::Settings;
use crate::state::ScreenState;
use crate::theme;
use crate::ticker::Ticker;
use crate::types::Variant;
use crate::utils::local_time;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) screen: ScreenState,
    pub(crate) rng: XorShift,
    pub(crate) ticker: Ticker,
    pub(crate) keyboard_shortcuts: bool,
    pub(crate) seed: Option<u64>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

/// Count key presses that should act like the Increment button. Auto-repeat
/// and key releases are ignored.
pub fn shortcut_presses(events: &[egui::Event]) -> usize {
    events
        .iter()
        .filter(|e| {
            matches!(
                e,
                egui::Event::Key {
                    key: egui::Key::Space | egui::Key::Enter,
                    pressed: true,
                    repeat: false,
                    ..
                }
            )
        })
        .count()
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let rng = match settings.seed {
            Some(seed) => {
                info!(seed, "Using fixed particle seed");
                XorShift::new(seed)
            }
            None => XorShift::from_clock(),
        };

        Self {
            screen: ScreenState::new(settings.variant),
            rng,
            ticker: Ticker::new(settings.variant.tick_interval()),
            keyboard_shortcuts: settings.keyboard_shortcuts,
            seed: settings.seed,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            variant: self.screen.variant,
            seed: self.seed,
            keyboard_shortcuts: self.keyboard_shortcuts,
        };
        settings.save(&self.data_dir);
    }

    /// Increment button handler
    pub fn press(&mut self, now: Instant) {
        let outcome = self.screen.press(local_time(), &mut self.rng);
        self.ticker.start(now);
        debug!(
            count = outcome.count,
            label = outcome.label_id,
            first_particle = outcome.particle_ids.0,
            last_particle = outcome.particle_ids.1,
            "Increment"
        );
    }

    pub fn set_variant(&mut self, variant: Variant) {
        if self.screen.variant == variant {
            return;
        }
        info!(variant = variant.label(), "Switching animation variant");
        self.screen.set_variant(variant);
        self.ticker.stop();
        self.ticker.set_interval(variant.tick_interval());
    }

    /// Run every tick that fell due since the last frame and schedule the
    /// next repaint. The ticker is torn down once nothing is animating.
    pub fn drive_animation(&mut self, ctx: &egui::Context, now: Instant) {
        let due = self.ticker.due(now);
        let interval = self.ticker.interval();
        for _ in 0..due {
            self.screen.tick(interval);
        }

        if self.screen.is_animating() {
            if let Some(wait) = self.ticker.until_next(now) {
                ctx.request_repaint_after(wait);
            }
        } else if self.ticker.is_running() {
            self.ticker.stop();
            debug!(count = self.screen.count, "Animations settled, ticker stopped");
        }
    }
}
