// Cosmetic timing: background sparkles and quark wobble offsets.
//
// Pure bookkeeping only; `frame.rs` turns the counts into DOM nodes.

use crate::constants::{
    MAX_FRAME_DT_SEC, SPARKLE_DELAY_MAX_SEC, SPARKLE_DURATION_MIN_SEC, SPARKLE_DURATION_SPAN_SEC,
    SPARKLE_LIFETIME_SEC, SPARKLE_SPAWN_INTERVAL_SEC, WOBBLE_DELAY_MAX_SEC,
};
use rand::Rng;
use std::collections::VecDeque;

/// Placement and animation timing for one sparkle.
#[derive(Clone, Copy, Debug)]
pub struct SparkleStyle {
    pub x: f32,
    pub y: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl SparkleStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            x: rng.gen::<f32>() * viewport_w,
            y: rng.gen::<f32>() * viewport_h,
            delay_sec: rng.gen::<f32>() * SPARKLE_DELAY_MAX_SEC,
            duration_sec: SPARKLE_DURATION_MIN_SEC + rng.gen::<f32>() * SPARKLE_DURATION_SPAN_SEC,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SparkleTick {
    pub expire: usize,
    pub spawn: usize,
}

/// Tracks sparkle ages; oldest first, since sparkles expire in spawn order.
#[derive(Debug, Default)]
pub struct SparkleClock {
    ages: VecDeque<f32>,
    since_spawn: f32,
}

impl SparkleClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> usize {
        self.ages.len()
    }

    /// Registers `n` sparkles created outside the regular cadence.
    pub fn seed(&mut self, n: usize) {
        self.ages.extend(std::iter::repeat(0.0).take(n));
    }

    pub fn tick(&mut self, dt_sec: f32) -> SparkleTick {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        for age in self.ages.iter_mut() {
            *age += dt;
        }
        let mut out = SparkleTick::default();
        while matches!(self.ages.front(), Some(&a) if a >= SPARKLE_LIFETIME_SEC) {
            self.ages.pop_front();
            out.expire += 1;
        }
        self.since_spawn += dt;
        while self.since_spawn >= SPARKLE_SPAWN_INTERVAL_SEC {
            self.since_spawn -= SPARKLE_SPAWN_INTERVAL_SEC;
            self.ages.push_back(0.0);
            out.spawn += 1;
        }
        out
    }
}

/// Random start offset so quarks do not wobble in lockstep.
pub fn wobble_delay<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * WOBBLE_DELAY_MAX_SEC
}
