use crate::config::Config;

/// Decides when the running simulation is due for another generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacer {
    pub default_interval_ms: u64,
    pub fast_interval_ms: u64,
}

impl Pacer {
    pub const fn new(default_interval_ms: u64, fast_interval_ms: u64) -> Self {
        Self {
            default_interval_ms,
            fast_interval_ms,
        }
    }

    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.default_interval_ms, config.fast_interval_ms)
    }

    /// Interval in effect, depending on whether the speed-up key is held
    pub const fn interval(&self, speed_up: bool) -> u64 {
        if speed_up {
            self.fast_interval_ms
        } else {
            self.default_interval_ms
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// True once at least `interval_ms` has passed since `last_ms`.
/// A clock that appears to go backwards never triggers a step.
pub const fn should_step(now_ms: u64, last_ms: u64, interval_ms: u64) -> bool {
    match now_ms.checked_sub(last_ms) {
        Some(elapsed) => elapsed >= interval_ms,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_follows_speed_key() {
        let pacer = Pacer::default();
        assert_eq!(pacer.interval(false), 500);
        assert_eq!(pacer.interval(true), 100);
    }

    #[test]
    fn test_tie_triggers_step() {
        assert!(should_step(1500, 1000, 500));
        assert!(!should_step(1499, 1000, 500));
        assert!(should_step(2000, 1000, 500));
    }

    #[test]
    fn test_clock_going_backwards_waits() {
        assert!(!should_step(900, 1000, 0));
    }
}
