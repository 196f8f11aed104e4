/// Accumulates frame time and fires once per elapsed interval.
///
/// Firing resets the accumulator to zero; any overshoot is dropped, so a
/// long frame never triggers catch-up firings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTimer {
    interval: f64,
    accumulator: f64,
}

impl IntervalTimer {
    /// Creates a timer firing every `interval` seconds.
    #[must_use]
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Adds `delta` seconds; returns `true` if the timer fires.
    ///
    /// Negative and non-finite deltas are ignored.
    pub fn tick(&mut self, delta: f64) -> bool {
        if delta.is_finite() && delta > 0.0 {
            self.accumulator += delta;
        }
        if self.accumulator >= self.interval {
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Seconds accumulated since the last firing.
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
