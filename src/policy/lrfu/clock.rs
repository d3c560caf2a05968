//! Logical clock and exponential decay weight.
//!
//! ```text
//!   weight(v) = 0.5 ^ (λ · v)
//!
//!   λ = 0.0   ─► weight ≡ 1.0            (scores never decay: pure frequency)
//!   λ = 1.0   ─► weight halves per tick   (fast decay: pure recency)
//! ```
//!
//! Time is measured in ticks of a per-policy counter, not wall-clock time.
//! The counter advances once per scoring-relevant touch and never goes back.

/// Decay rate clamped into `[0, 1]`. NaN maps to `0`.
pub(crate) fn clamp_lambda(lambda: f64) -> f64 {
    if lambda.is_nan() {
        0.0
    } else {
        lambda.clamp(0.0, 1.0)
    }
}

/// Monotonic touch counter paired with the decay rate λ.
#[derive(Debug, Clone)]
pub struct ScoreClock {
    lambda: f64,
    count: u64,
}

impl ScoreClock {
    /// Creates a clock at tick 0. `lambda` is clamped into `[0, 1]`.
    pub fn new(lambda: f64) -> Self {
        Self {
            lambda: clamp_lambda(lambda),
            count: 0,
        }
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Current tick.
    pub fn now(&self) -> u64 {
        self.count
    }

    /// Advances the clock by one tick and returns the new value.
    pub fn tick(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    /// `0.5 ^ (λ · ticks)`.
    pub fn weight(&self, ticks: u64) -> f64 {
        0.5f64.powf(self.lambda * ticks as f64)
    }

    /// Decays `score`, last touched at tick `last_touched_at`, to the current tick.
    pub fn decayed(&self, score: f64, last_touched_at: u64) -> f64 {
        self.weight(self.count.saturating_sub(last_touched_at)) * score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lambda_is_clamped() {
        assert_eq!(ScoreClock::new(-1.0).lambda(), 0.0);
        assert_eq!(ScoreClock::new(5.0).lambda(), 1.0);
        assert_eq!(ScoreClock::new(0.3).lambda(), 0.3);
        assert_eq!(ScoreClock::new(f64::NAN).lambda(), 0.0);
        assert_eq!(ScoreClock::new(f64::INFINITY).lambda(), 1.0);
    }

    #[test]
    fn weight_at_zero_is_exactly_one() {
        for lambda in [0.0, 0.1, 0.3, 0.5, 0.99, 1.0] {
            assert_eq!(ScoreClock::new(lambda).weight(0), 1.0);
        }
    }

    #[test]
    fn weight_halves_per_tick_at_full_recency() {
        let clock = ScoreClock::new(1.0);
        assert_eq!(clock.weight(1), 0.5);
        assert_eq!(clock.weight(3), 0.125);
    }

    #[test]
    fn zero_lambda_never_decays() {
        let clock = ScoreClock::new(0.0);
        assert_eq!(clock.weight(1_000_000), 1.0);
    }

    #[test]
    fn tick_is_monotonic() {
        let mut clock = ScoreClock::new(0.5);
        assert_eq!(clock.now(), 0);
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.now(), 2);
    }

    #[test]
    fn decayed_uses_elapsed_ticks() {
        let mut clock = ScoreClock::new(1.0);
        clock.tick();
        clock.tick();
        clock.tick();
        assert_eq!(clock.decayed(4.0, 1), 1.0);
        assert_eq!(clock.decayed(4.0, 3), 4.0);
    }
}
