//! Random source for particle attributes
//!
//! The screen never reaches for ambient randomness; callers hand in a
//! `RandomSource`, so a fixed seed reproduces a burst exactly.

use std::time::{SystemTime, UNIX_EPOCH};

pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform in [0, 1)
    fn next_f32(&mut self) -> f32 {
        // top 24 bits fit the f32 mantissa exactly
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform in [low, low + spread)
    fn range(&mut self, low: f32, spread: f32) -> f32 {
        let high = low + spread;
        let value = low + self.next_f32() * spread;
        // the sum can round up onto `high`
        if spread > 0.0 && value >= high {
            float_below(high)
        } else {
            value
        }
    }

    /// Uniform index in [0, len)
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }
}

/// Largest f32 strictly below `x` (finite `x`)
fn float_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f32::from_bits(x.to_bits() + 1)
    } else {
        -f32::from_bits(1)
    }
}

/// xorshift64 generator
#[derive(Debug, Clone)]
pub struct XorShift {
    state: u64,
}

impl XorShift {
    pub fn new(seed: u64) -> Self {
        // zero is a fixed point of xorshift
        let state = if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed };
        Self { state }
    }

    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9e37_79b9_7f4a_7c15);
        Self::new(nanos)
    }
}

impl RandomSource for XorShift {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}
