//! Screen state and the two transitions that mutate it: a press and a tick.

use crate::animation::{advance, FlashPulse};
use crate::constants::*;
use crate::random::RandomSource;
use crate::types::*;
use chrono::NaiveTime;
use egui::Color32;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub variant: Variant,
    pub count: u64,
    pub labels: Vec<FloatingLabel>,
    pub particles: Vec<Particle>,
    /// Newest first
    pub log: Vec<LogEntry>,
    pub flash: FlashPulse,
    next_id: u64,
}

impl ScreenState {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            count: 0,
            labels: Vec::new(),
            particles: Vec::new(),
            log: Vec::new(),
            flash: FlashPulse::default(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Handle one press of the Increment button.
    pub fn press(&mut self, now: NaiveTime, rng: &mut impl RandomSource) -> PressOutcome {
        self.count = self.count.saturating_add(1);

        let label_id = self.allocate_id();
        self.labels.push(FloatingLabel { id: label_id, progress: 0.0 });

        let burst = self.variant.particle_count();
        let first = self.next_id;
        for _ in 0..burst {
            let id = self.allocate_id();
            self.particles.push(spawn_particle(id, rng));
        }
        let last = self.next_id - 1;

        self.log.insert(0, LogEntry::new(self.count, now));
        self.flash.trigger(self.variant.flash_ramp());

        PressOutcome {
            count: self.count,
            label_id,
            particle_ids: (first, last),
        }
    }

    /// Advance all transient entities by one tick of `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.labels = advance(std::mem::take(&mut self.labels), dt);
        self.particles = advance(std::mem::take(&mut self.particles), dt);
        self.flash.advance(dt);
    }

    /// True while a tick would still change something on screen
    pub fn is_animating(&self) -> bool {
        !self.labels.is_empty() || !self.particles.is_empty() || self.flash.is_active()
    }

    pub fn flash_intensity(&self) -> f32 {
        self.flash.intensity(self.variant.flash_ramp())
    }

    /// Switch variant; live effects are cleared, counter and log are kept.
    pub fn set_variant(&mut self, variant: Variant) {
        if self.variant != variant {
            self.variant = variant;
            self.labels.clear();
            self.particles.clear();
            self.flash = FlashPulse::default();
        }
    }
}

fn spawn_particle(id: u64, rng: &mut impl RandomSource) -> Particle {
    let x = rng.range(PARTICLE_ORIGIN_X - PARTICLE_JITTER_X, PARTICLE_JITTER_X * 2.0);
    let size = rng.range(PARTICLE_SIZE_MIN, PARTICLE_SIZE_SPREAD);
    let angle = rng.range(0.0, 360.0);
    let [r, g, b] = PARTICLE_PALETTE[rng.index(PARTICLE_PALETTE.len())];
    Particle {
        id,
        x,
        y: PARTICLE_ORIGIN_Y,
        size,
        angle,
        color: Color32::from_rgb(r, g, b),
        progress: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::XorShift;
    use std::collections::HashSet;

    fn ten_am() -> NaiveTime {
        NaiveTime::from_hms_opt(10, 0, 0).unwrap()
    }

    fn all_ids(state: &ScreenState) -> Vec<u64> {
        state
            .labels
            .iter()
            .map(|l| l.id)
            .chain(state.particles.iter().map(|p| p.id))
            .collect()
    }

    #[test]
    fn single_press_at_ten_am() {
        for variant in Variant::ALL {
            let mut state = ScreenState::new(variant);
            let mut rng = XorShift::new(1);
            state.press(ten_am(), &mut rng);

            assert_eq!(state.count, 1);
            let log: Vec<&str> = state.log.iter().map(|e| e.text.as_str()).collect();
            assert_eq!(log, ["Count: 1 added at 10:00:00"]);
            assert_eq!(state.labels.len(), 1);
            assert_eq!(state.particles.len(), variant.particle_count());
            assert!(state.labels.iter().all(|l| l.progress == 0.0));
            assert!(state.particles.iter().all(|p| p.progress == 0.0));
            assert!(state.flash.is_active());
        }
    }

    #[test]
    fn counter_and_log_track_every_press() {
        let mut state = ScreenState::new(Variant::Lynx);
        let mut rng = XorShift::new(9);
        for n in 1..=25u64 {
            let t = NaiveTime::from_hms_opt(12, 0, n as u32).unwrap();
            let outcome = state.press(t, &mut rng);
            assert_eq!(outcome.count, n);
            assert_eq!(state.count, n);
            assert_eq!(state.log.len() as u64, n);
            assert_eq!(state.log[0].count, n);
            assert_eq!(state.log[0].text, format!("Count: {} added at 12:00:{:02}", n, n));
        }
    }

    #[test]
    fn rapid_presses_get_disjoint_ids() {
        let mut state = ScreenState::new(Variant::Native);
        let mut rng = XorShift::new(5);
        let a = state.press(ten_am(), &mut rng);
        let b = state.press(ten_am(), &mut rng);

        assert_eq!(state.count, 2);
        assert_eq!(state.log.len(), 2);
        assert_eq!(state.log[0].count, 2);
        assert_eq!(state.log[1].count, 1);
        assert_eq!(state.labels.len(), 2);
        assert_eq!(state.particles.len(), 40);
        assert!(a.particle_ids.1 < b.label_id);
        assert_eq!(a.particle_ids.1 - a.particle_ids.0 + 1, 20);

        let ids = all_ids(&state);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn ids_never_reuse_retired_entities() {
        let mut state = ScreenState::new(Variant::Lynx);
        let mut rng = XorShift::new(11);
        state.press(ten_am(), &mut rng);
        let before: HashSet<u64> = all_ids(&state).into_iter().collect();
        while state.is_animating() {
            state.tick(Variant::Lynx.tick_interval());
        }
        state.press(ten_am(), &mut rng);
        assert!(all_ids(&state).iter().all(|id| !before.contains(id)));
    }

    #[test]
    fn ticks_retire_everything_but_keep_counter_and_log() {
        let mut state = ScreenState::new(Variant::Lynx);
        let mut rng = XorShift::new(2);
        state.press(ten_am(), &mut rng);
        let log = state.log.clone();

        // labels live 1000ms = 20 ticks of 50ms
        for _ in 0..19 {
            state.tick(Duration::from_millis(50));
        }
        assert_eq!(state.labels.len(), 1);
        state.tick(Duration::from_millis(50));
        assert!(state.labels.is_empty());
        assert_eq!(state.particles.len(), 10);

        // particles live 1500ms = 30 ticks
        for _ in 0..10 {
            state.tick(Duration::from_millis(50));
        }
        assert!(state.particles.is_empty());
        assert!(!state.is_animating());
        assert_eq!(state.count, 1);
        assert_eq!(state.log, log);
    }

    #[test]
    fn progress_never_decreases_while_live() {
        let mut state = ScreenState::new(Variant::Native);
        let mut rng = XorShift::new(4);
        state.press(ten_am(), &mut rng);
        let mut last: Vec<(u64, f32)> = state.particles.iter().map(|p| (p.id, p.progress)).collect();
        while !state.particles.is_empty() {
            state.tick(Variant::Native.tick_interval());
            for p in &state.particles {
                let prev = last.iter().find(|(id, _)| *id == p.id).map(|(_, v)| *v).unwrap();
                assert!(p.progress >= prev);
                assert!(p.progress < 1.0);
            }
            last = state.particles.iter().map(|p| (p.id, p.progress)).collect();
        }
    }

    #[test]
    fn seeded_bursts_are_reproducible() {
        let mut a = ScreenState::new(Variant::Native);
        let mut b = ScreenState::new(Variant::Native);
        a.press(ten_am(), &mut XorShift::new(77));
        b.press(ten_am(), &mut XorShift::new(77));
        assert_eq!(a.particles, b.particles);
    }

    #[test]
    fn particle_attributes_stay_in_spawn_ranges() {
        let mut state = ScreenState::new(Variant::Native);
        let mut rng = XorShift::new(123);
        for _ in 0..20 {
            state.press(ten_am(), &mut rng);
        }
        let palette: Vec<Color32> = PARTICLE_PALETTE
            .iter()
            .map(|[r, g, b]| Color32::from_rgb(*r, *g, *b))
            .collect();
        for p in &state.particles {
            assert!((35.0..65.0).contains(&p.x));
            assert_eq!(p.y, 50.0);
            assert!((5.0..15.0).contains(&p.size));
            assert!((0.0..360.0).contains(&p.angle));
            assert!(palette.contains(&p.color));
        }
    }

    #[test]
    fn top_draws_stay_inside_spawn_ranges() {
        struct Maxed;
        impl RandomSource for Maxed {
            fn next_u64(&mut self) -> u64 {
                u64::MAX
            }
        }

        let mut state = ScreenState::new(Variant::Lynx);
        state.press(ten_am(), &mut Maxed);
        for p in &state.particles {
            assert!(p.x < 65.0, "x = {}", p.x);
            assert!(p.size < 15.0);
            assert!(p.angle < 360.0);
        }
    }

    #[test]
    fn switching_variant_clears_effects_only() {
        let mut state = ScreenState::new(Variant::Native);
        state.press(ten_am(), &mut XorShift::new(1));
        state.set_variant(Variant::Lynx);
        assert!(!state.is_animating());
        assert_eq!(state.count, 1);
        assert_eq!(state.log.len(), 1);
    }
}
