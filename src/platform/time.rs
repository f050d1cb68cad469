//! Wall-clock frame timing

/// Measures elapsed seconds between loop iterations from millisecond
/// timestamps (`Date.now()` in the browser).
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    /// Start measuring from `start_ms`; the first frame's dt covers the
    /// time since startup.
    pub fn new(start_ms: f64) -> Self {
        Self { last_ms: start_ms }
    }

    /// Seconds since the previous call. Not clamped or smoothed.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = (now_ms - self.last_ms) / 1000.0;
        self.last_ms = now_ms;
        dt as f32
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }
}
