//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Burst Counter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lifetime of a floating "+1" label
pub const LABEL_LIFETIME: Duration = Duration::from_millis(1000);
/// Lifetime of a single burst particle
pub const PARTICLE_LIFETIME: Duration = Duration::from_millis(1500);

/// Flash pulse: base -> highlight
pub const FLASH_RISE: Duration = Duration::from_millis(150);
/// Flash pulse: highlight -> base
pub const FLASH_FALL: Duration = Duration::from_millis(850);

/// Progress within this distance of 1.0 snaps to completion, so accumulated
/// float steps (20 x 0.05) still finish on the intended tick.
pub const PROGRESS_EPSILON: f32 = 1e-4;

// Floating label keyframes
pub const LABEL_RISE_PX: f32 = 50.0;
pub const LABEL_FONT_START: f32 = 40.0;
pub const LABEL_FONT_END: f32 = 20.0;
pub const LABEL_OPACITY_KEYS: [(f32, f32); 3] = [(0.0, 1.0), (0.7, 0.7), (1.0, 0.0)];

// Particle spawn ranges (percent of the counter area)
pub const PARTICLE_ORIGIN_X: f32 = 50.0;
pub const PARTICLE_ORIGIN_Y: f32 = 50.0;
pub const PARTICLE_JITTER_X: f32 = 15.0;
pub const PARTICLE_SIZE_MIN: f32 = 5.0;
pub const PARTICLE_SIZE_SPREAD: f32 = 10.0;
pub const PARTICLE_TRAVEL: f32 = 50.0;
pub const PARTICLE_OPACITY_KEYS: [(f32, f32); 3] = [(0.0, 1.0), (0.7, 0.5), (1.0, 0.0)];

/// Particle colours, drawn uniformly per particle (RGB)
pub const PARTICLE_PALETTE: [[u8; 3]; 5] = [
    [0x4a, 0x90, 0xe2],
    [0xe2, 0x4a, 0x4a],
    [0x4a, 0xe2, 0x4a],
    [0xe2, 0xe2, 0x4a],
    [0xe2, 0x4a, 0xe2],
];
