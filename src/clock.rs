/// Turns the host's frame timestamps into per-frame deltas.
///
/// `previous` starts at zero, so the first delta is the first timestamp
/// itself. Consumers must tolerate that oversized first step.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    previous: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the previous tick.
    pub fn tick(&mut self, now: f64) -> f64 {
        let delta = now - self.previous;
        self.previous = now;
        delta
    }

    pub fn previous(&self) -> f64 {
        self.previous
    }
}
