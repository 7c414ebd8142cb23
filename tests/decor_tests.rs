// Host-side tests for sparkle bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod decor {
    include!("../src/decor.rs");
}

use constants::*;
use decor::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run(clock: &mut SparkleClock, seconds: f32, step: f32) -> SparkleTick {
    let mut total = SparkleTick::default();
    let mut t = 0.0;
    while t < seconds {
        let tick = clock.tick(step);
        total.expire += tick.expire;
        total.spawn += tick.spawn;
        t += step;
    }
    total
}

#[test]
fn spawns_on_cadence() {
    let mut clock = SparkleClock::new();
    let total = run(&mut clock, 10.0, 0.25);
    assert_eq!(total.spawn, 5);
    assert_eq!(total.expire, 0);
    assert_eq!(clock.live(), 5);
}

#[test]
fn seeded_sparkles_expire_after_lifetime() {
    let mut clock = SparkleClock::new();
    clock.seed(SPARKLE_INITIAL_COUNT);
    let early = run(&mut clock, SPARKLE_LIFETIME_SEC - 1.0, 0.25);
    assert_eq!(early.expire, 0);
    let later = run(&mut clock, 2.0, 0.25);
    assert_eq!(later.expire, SPARKLE_INITIAL_COUNT);
}

#[test]
fn long_pause_does_not_burst() {
    let mut clock = SparkleClock::new();
    let tick = clock.tick(600.0);
    assert_eq!(tick.spawn, 0);
    assert_eq!(tick.expire, 0);
}

#[test]
fn steady_state_population_is_bounded() {
    let mut clock = SparkleClock::new();
    clock.seed(SPARKLE_INITIAL_COUNT);
    run(&mut clock, 120.0, 0.25);
    let expected = (SPARKLE_LIFETIME_SEC / SPARKLE_SPAWN_INTERVAL_SEC) as usize;
    assert!(clock.live() <= expected + 1, "live = {}", clock.live());
    assert!(clock.live() + 1 >= expected, "live = {}", clock.live());
}

#[test]
fn sparkle_style_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let s = SparkleStyle::random(&mut rng, 1280.0, 720.0);
        assert!((0.0..=1280.0).contains(&s.x));
        assert!((0.0..=720.0).contains(&s.y));
        assert!((0.0..=SPARKLE_DELAY_MAX_SEC).contains(&s.delay_sec));
        assert!(s.duration_sec >= SPARKLE_DURATION_MIN_SEC);
        assert!(s.duration_sec <= SPARKLE_DURATION_MIN_SEC + SPARKLE_DURATION_SPAN_SEC);
    }
}

#[test]
fn wobble_delay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let d = wobble_delay(&mut rng);
        assert!((0.0..=WOBBLE_DELAY_MAX_SEC).contains(&d));
    }
}
