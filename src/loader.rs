//! Progress model for the boot loader overlay.
//!
//! Two timed phases over wall-clock milliseconds. Phase one ramps from zero
//! to a target percentage with a cubic ease-out; when the consent gate was
//! not pre-verified the target stops short of 100 and the model idles there
//! until the page's load signal starts phase two, a shorter quadratic
//! ease-out to 100. Emitted percentages are rounded, never decrease and never
//! overshoot 100.

use crate::anim::{ease_out_cubic, ease_out_quad, Timeline};

/// Phase-one duration.
pub const RAMP_MS: f64 = 1800.0;
/// Phase-two duration.
pub const FINISH_MS: f64 = 400.0;
/// Phase-one target when the page load signal has not been observed yet.
pub const PARTIAL_TARGET: u32 = 85;
/// Delay between hitting 100% and signalling completion.
pub const COMPLETE_DELAY_MS: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Ramp,
    /// Phase one ended below 100; waiting for the page load signal.
    Stalled,
    Finish,
    Done,
}

/// Outcome of advancing the model by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep scheduling frames; display the carried percentage.
    Running(u32),
    /// The current phase ended below 100; display and wait for `finish()`.
    Idle(u32),
    /// Reached 100; display it and stop scheduling.
    Complete,
}

#[derive(Debug, Clone)]
pub struct LoaderModel {
    timeline: Timeline,
    target: u32,
    floor: u32,
    percent: u32,
    phase: Phase,
}

impl LoaderModel {
    /// Starts phase one at `now_ms`. `verified` is the consent-gate reading:
    /// a pre-verified session ramps straight to 100.
    pub fn new(now_ms: f64, verified: bool) -> Self {
        Self {
            timeline: Timeline::new(now_ms, RAMP_MS, ease_out_cubic),
            target: if verified { 100 } else { PARTIAL_TARGET },
            floor: 0,
            percent: 0,
            phase: Phase::Ramp,
        }
    }

    /// Current displayed percentage.
    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Advances the active phase to `now_ms`.
    pub fn step(&mut self, now_ms: f64) -> Step {
        match self.phase {
            Phase::Ramp | Phase::Finish => {
                let span = (self.target - self.floor) as f64;
                let raw = self.floor as f64 + self.timeline.eased(now_ms) * span;
                // Monotonic guard: rounding across phases must never step back.
                self.percent = self.percent.max((raw.round() as u32).min(100));

                if !self.timeline.is_done(now_ms) {
                    return Step::Running(self.percent);
                }
                self.percent = self.target;
                if self.target == 100 {
                    self.phase = Phase::Done;
                    Step::Complete
                } else {
                    self.phase = Phase::Stalled;
                    Step::Idle(self.percent)
                }
            }
            Phase::Stalled => Step::Idle(self.percent),
            Phase::Done => Step::Complete,
        }
    }

    /// Begins phase two at `now_ms`. No-op unless the model is stalled below
    /// 100 (the page load signal can race the ramp).
    pub fn finish(&mut self, now_ms: f64) -> bool {
        if self.phase != Phase::Stalled || self.percent >= 100 {
            return false;
        }
        self.floor = self.percent;
        self.target = 100;
        self.timeline = Timeline::new(now_ms, FINISH_MS, ease_out_quad);
        self.phase = Phase::Finish;
        true
    }

    /// Jumps straight to 100 (the skip control's path).
    pub fn skip(&mut self) {
        self.percent = 100;
        self.phase = Phase::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(model: &mut LoaderModel, from_ms: f64, to_ms: f64, tick: f64) -> Vec<u32> {
        let mut out = Vec::new();
        let mut t = from_ms;
        while t <= to_ms {
            match model.step(t) {
                Step::Running(p) | Step::Idle(p) => out.push(p),
                Step::Complete => {
                    out.push(100);
                    break;
                }
            }
            t += tick;
        }
        out
    }

    #[test]
    fn verified_ramp_is_monotonic_and_ends_at_100() {
        let mut model = LoaderModel::new(0.0, true);
        let seq = drive(&mut model, 0.0, 2000.0, 16.0);
        assert!(seq.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*seq.last().unwrap(), 100);
        assert!(seq.iter().all(|&p| p <= 100));
    }

    #[test]
    fn unverified_ramp_idles_at_partial_target() {
        let mut model = LoaderModel::new(0.0, false);
        let seq = drive(&mut model, 0.0, 2500.0, 16.0);
        assert_eq!(*seq.last().unwrap(), PARTIAL_TARGET);
        // Still stalled: further frames change nothing.
        assert_eq!(model.step(5000.0), Step::Idle(PARTIAL_TARGET));
    }

    #[test]
    fn finish_phase_reaches_100_within_its_duration() {
        let mut model = LoaderModel::new(0.0, false);
        // Drive past the ramp so the model reaches its stall.
        drive(&mut model, 0.0, 1900.0, 16.0);
        assert!(model.finish(2000.0));
        let seq = drive(&mut model, 2000.0, 2000.0 + FINISH_MS, 16.0);
        assert!(seq.windows(2).all(|w| w[0] <= w[1]));
        assert!(seq.iter().all(|&p| (PARTIAL_TARGET..=100).contains(&p)));
        assert_eq!(*seq.last().unwrap(), 100);
        assert_eq!(model.step(9999.0), Step::Complete);
    }

    #[test]
    fn finish_is_rejected_outside_the_stall() {
        let mut model = LoaderModel::new(0.0, true);
        assert!(!model.finish(100.0));
        drive(&mut model, 0.0, 1900.0, 16.0);
        assert!(!model.finish(2000.0));
    }

    #[test]
    fn skip_jumps_to_complete() {
        let mut model = LoaderModel::new(0.0, false);
        model.step(100.0);
        model.skip();
        assert_eq!(model.percent(), 100);
        assert_eq!(model.step(200.0), Step::Complete);
    }
}
