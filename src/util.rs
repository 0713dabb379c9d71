//! Small numeric helpers plus the rate-limiting state machines shared by the
//! scroll and resize handlers.
//!
//! Everything here is pure over injected timestamps (milliseconds from
//! `performance.now()`), so the semantics are testable on the host without a
//! browser.

/// Clamps `val` into `[min, max]`.
#[inline]
pub fn clamp(val: f64, min: f64, max: f64) -> f64 {
    val.max(min).min(max)
}

/// Linear interpolation from `start` toward `end` by `amount`.
#[inline]
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// Remaps `val` from `[in_min, in_max]` to `[out_min, out_max]`.
#[inline]
pub fn map_range(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + ((val - in_min) / (in_max - in_min)) * (out_max - out_min)
}

/// Leading-edge rate limiter: at most one pass per `interval_ms`.
///
/// Triggers that land inside an open window are dropped, not queued — the
/// trailing event within a window is lost unless it also opens the next one.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    /// Returns `true` if a call at `now_ms` may pass, consuming the window.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing-edge quiet-period gate: fires once `quiet_ms` has elapsed since
/// the last trigger, with every intermediate trigger resetting the clock.
#[derive(Debug, Clone)]
pub struct Debounce {
    quiet_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            deadline: None,
        }
    }

    /// Records a triggering event at `now_ms`, arming (or pushing back) the
    /// deadline.
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.quiet_ms);
    }

    /// Returns `true` exactly once per quiet period, when `now_ms` has passed
    /// the armed deadline.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Single-shot latch for animations that must never replay.
#[derive(Debug, Default, Clone)]
pub struct Once {
    taken: bool,
}

impl Once {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` on the first call only.
    pub fn take(&mut self) -> bool {
        !std::mem::replace(&mut self.taken, true)
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn map_range_basic() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(0.0, -1.0, 1.0, 0.0, 4.0), 2.0);
    }

    #[test]
    fn throttle_drops_intermediate_triggers() {
        let mut t = Throttle::new(50.0);
        assert!(t.ready(0.0));
        assert!(!t.ready(10.0));
        assert!(!t.ready(49.0));
        assert!(t.ready(50.0));
        assert!(!t.ready(51.0));
    }

    #[test]
    fn debounce_fires_once_after_quiet_period() {
        let mut d = Debounce::new(200.0);
        d.trigger(0.0);
        assert!(!d.fire(100.0));
        // A second trigger resets the clock.
        d.trigger(150.0);
        assert!(!d.fire(250.0));
        assert!(d.fire(350.0));
        // Spent until re-armed.
        assert!(!d.fire(1000.0));
    }

    #[test]
    fn once_is_single_shot() {
        let mut once = Once::new();
        assert!(once.take());
        assert!(!once.take());
        assert!(once.is_taken());
    }
}
