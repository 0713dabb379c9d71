//! Easing curves and the wall-clock animation timeline.
//!
//! Easing functions are pure maps from a progress fraction in `[0, 1]` to an
//! eased fraction in `[0, 1]`, so duration accuracy is independent of frame
//! rate: each frame recomputes progress from elapsed time rather than
//! counting frames.

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f64) -> f64;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-out (slower end than quadratic).
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Exponential ease-out, pinned to exactly 1.0 at completion.
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Duration for a counting animation, scaled with the target's magnitude so
/// large numbers do not finish in the same blink as small ones.
pub fn counter_duration_ms(target: u32) -> f64 {
    let magnitude = f64::from(target.max(1)).log10();
    (1200.0 + magnitude * 250.0).min(2200.0)
}

/// A finite animation keyed on wall-clock milliseconds.
///
/// Progress is `min(elapsed / duration, 1)` — forced to exactly 1 at or past
/// the end so the final frame always applies the terminal value.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    start_ms: f64,
    duration_ms: f64,
    easing: EasingFn,
}

impl Timeline {
    pub fn new(start_ms: f64, duration_ms: f64, easing: EasingFn) -> Self {
        Self {
            start_ms,
            // A zero duration would divide by zero; treat it as instant.
            duration_ms: duration_ms.max(f64::MIN_POSITIVE),
            easing,
        }
    }

    /// Raw progress fraction at `now_ms`, in [0, 1].
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased progress at `now_ms`.
    pub fn eased(&self, now_ms: f64) -> f64 {
        (self.easing)(self.progress(now_ms))
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for ease in [linear, ease_out_quad, ease_out_cubic, ease_out_expo] {
            assert_eq!(ease(0.0), 0.0);
            assert_eq!(ease(1.0), 1.0);
            // Out-of-range inputs are clamped, never extrapolated.
            assert_eq!(ease(-0.5), 0.0);
            assert_eq!(ease(1.5), 1.0);
        }
    }

    #[test]
    fn ease_out_curves_lead_linear() {
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!(ease_out_quad(t) > t);
            assert!(ease_out_cubic(t) > ease_out_quad(t));
        }
    }

    #[test]
    fn ease_out_expo_matches_closed_form() {
        let t = 0.5;
        assert!((ease_out_expo(t) - (1.0 - 2f64.powf(-5.0))).abs() < 1e-12);
    }

    #[test]
    fn timeline_progress_is_clamped_and_terminal() {
        let tl = Timeline::new(1000.0, 400.0, linear);
        assert_eq!(tl.progress(900.0), 0.0);
        assert_eq!(tl.progress(1200.0), 0.5);
        assert_eq!(tl.progress(1400.0), 1.0);
        assert_eq!(tl.progress(9999.0), 1.0);
        assert!(!tl.is_done(1399.0));
        assert!(tl.is_done(1400.0));
    }

    #[test]
    fn counter_duration_grows_with_magnitude_and_caps() {
        assert!(counter_duration_ms(5) < counter_duration_ms(500));
        assert!(counter_duration_ms(500) < counter_duration_ms(50_000));
        assert!(counter_duration_ms(u32::MAX) <= 2200.0);
        // Zero must not produce NaN.
        assert!(counter_duration_ms(0).is_finite());
    }

    #[test]
    fn timeline_applies_easing() {
        let tl = Timeline::new(0.0, 100.0, ease_out_quad);
        assert_eq!(tl.eased(50.0), 0.75);
        assert_eq!(tl.eased(100.0), 1.0);
    }
}
