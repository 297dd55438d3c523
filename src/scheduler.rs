/// Drives fixed-step ticks from the per-frame render callback.
///
/// Every frame reports its timestamp; once a full interval has elapsed since
/// the last tick the scheduler fires one tick and restarts the count. In
/// between it exposes how far through the interval the frame is, which the
/// renderer uses for easing.
#[derive(Clone, Debug, Default)]
pub struct TickScheduler {
    last_tick: Option<f64>,
    progress: f64,
}

impl TickScheduler {
    /// Returns true when a tick is due at `now`. The interval is read fresh
    /// on every call, so changes apply from the next cycle.
    pub fn advance(&mut self, now: f64, interval: f64) -> bool {
        let last = *self.last_tick.get_or_insert(now);
        self.progress = ((now - last) / interval).clamp(0.0, 1.0);
        if self.progress >= 1.0 {
            self.last_tick = Some(now);
            self.progress = 0.0;
            true
        } else {
            false
        }
    }

    /// Fraction of the current interval already elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn reset(&mut self) {
        *self = TickScheduler::default();
    }
}
