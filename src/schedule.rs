use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that ends a [`FrameLoop`]. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Runs update-then-render once per host frame until stopped.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    stop: StopSignal,
    frames: u64,
}

impl FrameLoop {
    pub fn new(stop: StopSignal) -> Self {
        Self { stop, frames: 0 }
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs `frame` unless the loop is stopped. Returns whether the host
    /// should request another frame.
    pub fn tick(&mut self, frame: impl FnOnce()) -> bool {
        if self.stop.is_stopped() {
            return false;
        }
        frame();
        self.frames += 1;
        !self.stop.is_stopped()
    }
}
