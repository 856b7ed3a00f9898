//! Common types and data structures

use chrono::NaiveTime;
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which of the two animation setups drives the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Frame-rate ticks, large burst, eased flash
    #[default]
    Native,
    /// Coarse timer ticks, small burst, linear flash ramp
    Lynx,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Native, Variant::Lynx];

    pub fn particle_count(self) -> usize {
        match self {
            Variant::Native => 20,
            Variant::Lynx => 10,
        }
    }

    pub fn tick_interval(self) -> Duration {
        match self {
            Variant::Native => Duration::from_millis(16),
            Variant::Lynx => Duration::from_millis(50),
        }
    }

    pub fn flash_ramp(self) -> FlashRamp {
        match self {
            Variant::Native => FlashRamp::Eased,
            Variant::Lynx => FlashRamp::Linear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Native => "Native",
            Variant::Lynx => "Lynx",
        }
    }
}

/// Shape of the background flash curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashRamp {
    Linear,
    Eased,
}

/// Anything whose lifetime is expressed as normalized progress
pub trait Animated {
    fn progress(&self) -> f32;
    fn set_progress(&mut self, progress: f32);
    /// Total time from progress 0 to 1
    fn lifetime(&self) -> Duration;
}

/// One floating "+1" label
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLabel {
    pub id: u64,
    pub progress: f32,
}

impl Animated for FloatingLabel {
    fn progress(&self) -> f32 {
        self.progress
    }

    fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    fn lifetime(&self) -> Duration {
        crate::constants::LABEL_LIFETIME
    }
}

/// One particle of a burst. `x`/`y` are percentages of the counter area.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub angle: f32, // degrees
    pub color: Color32,
    pub progress: f32,
}

impl Animated for Particle {
    fn progress(&self) -> f32 {
        self.progress
    }

    fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    fn lifetime(&self) -> Duration {
        crate::constants::PARTICLE_LIFETIME
    }
}

/// Immutable log line recorded by a press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub count: u64,
    pub text: String,
}

impl LogEntry {
    pub fn new(count: u64, at: NaiveTime) -> Self {
        Self {
            count,
            text: format!("Count: {} added at {}", count, at.format("%H:%M:%S")),
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// What a single press spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressOutcome {
    pub count: u64,
    pub label_id: u64,
    pub particle_ids: (u64, u64), // inclusive range
}
