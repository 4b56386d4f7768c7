use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::consts::{BASE_TICK_INTERVAL_MS, MAX_SPEED, MIN_SPEED, TICK_STEP_MS};

/// Time between ticks at the given speed tier. Tiers outside 1..=8 are clamped.
pub fn tick_interval(speed: u32) -> Duration {
    let tier = speed.max(MIN_SPEED).min(MAX_SPEED) as u64;
    Duration::from_millis(BASE_TICK_INTERVAL_MS - (tier - 1) * TICK_STEP_MS)
}

/// Turns wall-clock time into tick triggers.
pub struct TickClock {
    last_tick: Instant,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        TickClock { last_tick: now }
    }

    /// Whether a tick is due at `now`. Arms the clock for the next tick if so.
    pub fn poll(&mut self, now: Instant, speed: u32) -> bool {
        if now.saturating_duration_since(self.last_tick) >= tick_interval(speed) {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

/// Seed for the session RNG, taken from the system clock's nanoseconds.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
