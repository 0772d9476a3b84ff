/// Samples older than this are ignored when estimating release velocity.
const HORIZON_MS: u64 = 100;

const CAPACITY: usize = 20;

/// Release-velocity estimator over a sliding window of pointer samples.
///
/// Feed it cumulative horizontal positions while a drag is active; on
/// release, [`VelocityTracker::velocity`] returns a secant estimate in
/// units per second over the last ~100 ms of motion.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: Vec<(u64, f32)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(CAPACITY),
        }
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn add_sample(&mut self, now_ms: u64, x: f32) {
        if self.samples.len() == CAPACITY {
            self.samples.remove(0);
        }
        self.samples.push((now_ms, x));
    }

    /// Estimated velocity in units/second, 0 when there is not enough
    /// recent motion to measure.
    pub fn velocity(&self) -> f32 {
        let Some(&(t_last, x_last)) = self.samples.last() else {
            return 0.0;
        };

        let cutoff = t_last.saturating_sub(HORIZON_MS);
        let Some(&(t_first, x_first)) = self.samples.iter().find(|(t, _)| *t >= cutoff) else {
            return 0.0;
        };

        let dt_ms = t_last.saturating_sub(t_first);
        if dt_ms == 0 {
            return 0.0;
        }
        (x_last - x_first) / (dt_ms as f32 / 1000.0)
    }
}
