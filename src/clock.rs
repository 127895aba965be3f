//! Frame timing.
//!
//! `draw_web()` calls at ~60fps with variable delta. `FrameClock` turns the
//! wall-clock timestamps into clamped per-frame deltas, and `Countdown`
//! consumes those deltas so delayed UI (the simulated form submission, page
//! fades) stays deterministic and testable without a browser.

/// Largest delta handed out for one frame. A backgrounded tab resumes with a
/// single short step instead of a huge jump.
const MAX_FRAME_MS: f64 = 500.0;

pub struct FrameClock {
    /// Timestamp of the last update (ms), None before the first frame
    last_timestamp: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_timestamp: None }
    }

    /// Feed a timestamp from `performance.now()`; returns the frame delta in ms.
    pub fn update(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        delta
    }
}

/// Counts down a fixed number of milliseconds of frame time.
#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    remaining_ms: f64,
}

impl Countdown {
    pub fn new(ms: f64) -> Self {
        Self { remaining_ms: ms }
    }

    /// Consume `delta_ms`; true once the countdown has run out.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        self.remaining_ms = (self.remaining_ms - delta_ms).max(0.0);
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.remaining_ms <= 0.0
    }

    #[cfg(test)]
    pub fn remaining_ms(&self) -> f64 {
        self.remaining_ms
    }
}
