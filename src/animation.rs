//! Progress-driven animation primitives
//!
//! Everything here is a pure function of progress or elapsed time. Stored
//! state is limited to progress values; positions, sizes, opacities and
//! colours are derived on demand.

use crate::constants::{FLASH_FALL, FLASH_RISE, PROGRESS_EPSILON};
use crate::types::{Animated, FlashRamp};
use egui::Color32;
use std::time::Duration;

pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Color32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let ch = |a: u8, b: u8| (a as f32).lerp(&(b as f32), fraction).round().clamp(0.0, 255.0) as u8;
        Color32::from_rgba_unmultiplied(
            ch(self.r(), target.r()),
            ch(self.g(), target.g()),
            ch(self.b(), target.b()),
            ch(self.a(), target.a()),
        )
    }
}

/// Piecewise-linear interpolation over `(input, output)` keyframes sorted by
/// input. Inputs outside the first/last key clamp to the edge outputs.
pub fn keyframes(progress: f32, keys: &[(f32, f32)]) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return 0.0;
    };
    if progress <= first.0 {
        return first.1;
    }
    if progress >= last.0 {
        return last.1;
    }
    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if progress <= b.0 {
            let span = b.0 - a.0;
            if span <= f32::EPSILON {
                return b.1;
            }
            return a.1.lerp(&b.1, (progress - a.0) / span);
        }
    }
    last.1
}

/// Standard ease-in-out curve, cubic bezier (0.42, 0, 0.58, 1).
pub fn ease_in_out(fraction: f32) -> f32 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;

    // Bisection on x; the curve is monotonic for control points inside [0, 1]
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut t = fraction;
    for _ in 0..24 {
        let x = curve(ax, bx, cx, t);
        if (x - fraction).abs() < 1e-6 {
            break;
        }
        if x > fraction {
            hi = t;
        } else {
            lo = t;
        }
        t = 0.5 * (lo + hi);
    }
    curve(ay, by, cy, t)
}

/// Advance every entity by `dt` of its lifetime, clamp at 1, and drop those
/// that completed. An entity that reaches 1 on this tick is gone from the
/// returned list.
pub fn advance<T: Animated>(entities: Vec<T>, dt: Duration) -> Vec<T> {
    entities
        .into_iter()
        .filter_map(|mut entity| {
            let lifetime = entity.lifetime().as_secs_f32();
            let step = if lifetime > 0.0 { dt.as_secs_f32() / lifetime } else { 1.0 };
            let mut next = (entity.progress() + step).min(1.0);
            if 1.0 - next < PROGRESS_EPSILON {
                next = 1.0;
            }
            entity.set_progress(next);
            (next < 1.0).then_some(entity)
        })
        .collect()
}

/// Background flash: rise to full intensity, then fall back to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashPulse {
    elapsed: Option<Duration>,
    from: f32,
}

impl FlashPulse {
    /// Restart the pulse, rising from whatever intensity is showing now.
    pub fn trigger(&mut self, ramp: FlashRamp) {
        self.from = self.intensity(ramp);
        self.elapsed = Some(Duration::ZERO);
    }

    pub fn advance(&mut self, dt: Duration) {
        if let Some(elapsed) = self.elapsed {
            let next = elapsed + dt;
            if next >= FLASH_RISE + FLASH_FALL {
                self.elapsed = None;
                self.from = 0.0;
            } else {
                self.elapsed = Some(next);
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    /// 0 = base colour, 1 = highlight
    pub fn intensity(&self, ramp: FlashRamp) -> f32 {
        let Some(elapsed) = self.elapsed else {
            return 0.0;
        };
        let shape = |f: f32| match ramp {
            FlashRamp::Linear => f,
            FlashRamp::Eased => ease_in_out(f),
        };
        if elapsed < FLASH_RISE {
            let f = elapsed.as_secs_f32() / FLASH_RISE.as_secs_f32();
            self.from.lerp(&1.0, shape(f))
        } else {
            let f = (elapsed - FLASH_RISE).as_secs_f32() / FLASH_FALL.as_secs_f32();
            1.0 - shape(f.min(1.0))
        }
    }
}
