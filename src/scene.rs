//! Maps `ScreenState` to plain draw data. Nothing here mutates state, so the
//! same snapshot always yields the same scene.

use crate::animation::{keyframes, Lerp};
use crate::constants::*;
use crate::state::ScreenState;
use crate::theme;
use egui::{Color32, Pos2};

#[derive(Debug, Clone, PartialEq)]
pub struct LabelSprite {
    pub id: u64,
    /// Upward offset in points from the resting position
    pub rise: f32,
    pub opacity: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSprite {
    pub id: u64,
    /// Centre in percent of the counter area
    pub center: Pos2,
    pub diameter: f32,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Color32,
    pub counter_text: String,
    pub labels: Vec<LabelSprite>,
    pub particles: Vec<ParticleSprite>,
}

impl Scene {
    pub fn build(state: &ScreenState) -> Self {
        let background = theme::FLASH_BASE.lerp(&theme::FLASH_HIGHLIGHT, state.flash_intensity());

        let labels = state
            .labels
            .iter()
            .map(|l| LabelSprite {
                id: l.id,
                rise: 0.0_f32.lerp(&LABEL_RISE_PX, l.progress),
                opacity: keyframes(l.progress, &LABEL_OPACITY_KEYS),
                font_size: LABEL_FONT_START.lerp(&LABEL_FONT_END, l.progress),
            })
            .collect();

        let particles = state
            .particles
            .iter()
            .map(|p| {
                let rad = p.angle.to_radians();
                let end_x = p.x + rad.cos() * PARTICLE_TRAVEL;
                let end_y = p.y + rad.sin() * PARTICLE_TRAVEL;
                let opacity = keyframes(p.progress, &PARTICLE_OPACITY_KEYS);
                ParticleSprite {
                    id: p.id,
                    center: Pos2::new(p.x.lerp(&end_x, p.progress), p.y.lerp(&end_y, p.progress)),
                    diameter: p.size.lerp(&0.0, p.progress),
                    color: p.color.gamma_multiply(opacity),
                }
            })
            .collect();

        Self {
            background,
            counter_text: format!("Count: {}", state.count),
            labels,
            particles,
        }
    }
}

/// Styling for one log row; index 0 is the newest entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRowStyle {
    pub border: Color32,
    pub text: Color32,
    pub font_size: f32,
    pub strong: bool,
}

pub fn log_row_style(index: usize) -> LogRowStyle {
    if index == 0 {
        LogRowStyle {
            border: theme::LOG_NEWEST,
            text: theme::LOG_NEWEST,
            font_size: theme::FONT_LOG_NEWEST,
            strong: true,
        }
    } else {
        LogRowStyle {
            border: theme::LOG_BORDER,
            text: theme::TEXT_PRIMARY,
            font_size: theme::FONT_LOG,
            strong: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::XorShift;
    use crate::types::Variant;
    use chrono::NaiveTime;
    use std::time::Duration;

    fn pressed(variant: Variant) -> ScreenState {
        let mut state = ScreenState::new(variant);
        state.press(NaiveTime::from_hms_opt(10, 0, 0).unwrap(), &mut XorShift::new(8));
        state
    }

    #[test]
    fn building_twice_gives_identical_scene() {
        let mut state = pressed(Variant::Native);
        state.tick(Duration::from_millis(160));
        let snapshot = state.clone();
        let a = Scene::build(&state);
        let b = Scene::build(&state);
        assert_eq!(a, b);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn idle_scene_shows_base_colour() {
        let scene = Scene::build(&ScreenState::new(Variant::Lynx));
        assert_eq!(scene.background, theme::FLASH_BASE);
        assert_eq!(scene.counter_text, "Count: 0");
        assert!(scene.labels.is_empty());
        assert!(scene.particles.is_empty());
    }

    #[test]
    fn fresh_label_starts_large_and_opaque() {
        let scene = Scene::build(&pressed(Variant::Lynx));
        let label = &scene.labels[0];
        assert_eq!(label.rise, 0.0);
        assert_eq!(label.opacity, 1.0);
        assert_eq!(label.font_size, LABEL_FONT_START);
    }

    #[test]
    fn label_visuals_follow_progress() {
        let mut state = pressed(Variant::Lynx);
        state.labels[0].progress = 0.5;
        let label = &Scene::build(&state).labels[0];
        assert!((label.rise - 25.0).abs() < 1e-4);
        assert!((label.font_size - 30.0).abs() < 1e-4);
        assert!(label.opacity < 1.0 && label.opacity > 0.7);
    }

    #[test]
    fn particles_start_at_spawn_point_and_shrink() {
        let mut state = pressed(Variant::Native);
        let scene = Scene::build(&state);
        for (sprite, p) in scene.particles.iter().zip(&state.particles) {
            assert_eq!(sprite.center, Pos2::new(p.x, p.y));
            assert_eq!(sprite.diameter, p.size);
        }

        state.particles[0].progress = 0.5;
        let p = state.particles[0].clone();
        let sprite = &Scene::build(&state).particles[0];
        let rad = p.angle.to_radians();
        assert!((sprite.center.x - (p.x + rad.cos() * 25.0)).abs() < 1e-3);
        assert!((sprite.center.y - (p.y + rad.sin() * 25.0)).abs() < 1e-3);
        assert!((sprite.diameter - p.size / 2.0).abs() < 1e-4);
    }

    #[test]
    fn flash_tints_background() {
        let mut state = pressed(Variant::Lynx);
        state.tick(Duration::from_millis(150));
        assert_eq!(Scene::build(&state).background, theme::FLASH_HIGHLIGHT);
    }

    #[test]
    fn newest_log_row_is_highlighted() {
        let newest = log_row_style(0);
        let older = log_row_style(1);
        assert!(newest.strong && !older.strong);
        assert!(newest.font_size > older.font_size);
        assert_ne!(newest.border, older.border);
        assert_eq!(log_row_style(1), log_row_style(7));
    }
}
