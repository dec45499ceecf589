use crate::config::Config;

/// Pointer position normalized to the viewport, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Maps raw client coordinates (origin top-left) into `[0,1]²` with Y up.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        Self {
            x: client_x / width,
            y: 1.0 - client_y / height,
        }
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Everything the backdrop needs to know about the pointer.
///
/// Input handlers call [`move_to`](Self::move_to), [`press`](Self::press),
/// [`touch_start`](Self::touch_start) and [`release`](Self::release); the
/// frame loop calls [`decay`](Self::decay) once per rendered frame whether or
/// not any input arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerState {
    pub current: PointerSample,
    pub previous: PointerSample,
    pub velocity: [f32; 2],
    pub pulse: f32,
    pub pressed: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            current: PointerSample::CENTER,
            previous: PointerSample::CENTER,
            velocity: [0.0, 0.0],
            pulse: 0.0,
            pressed: false,
        }
    }
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, sample: PointerSample) {
        self.previous = self.current;
        self.current = sample;
        self.velocity = [
            self.current.x - self.previous.x,
            self.current.y - self.previous.y,
        ];
    }

    pub fn press(&mut self) {
        self.pressed = true;
        self.pulse = 1.0;
    }

    pub fn touch_start(&mut self, sample: PointerSample) {
        self.move_to(sample);
        self.press();
    }

    /// Stops re-triggering the pulse. A running pulse keeps fading.
    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn decay(&mut self, config: &Config) {
        self.velocity[0] *= config.velocity_decay;
        self.velocity[1] *= config.velocity_decay;

        if self.pulse > 0.0 {
            let step = config.pulse_decay_step;
            let next = self.pulse - step;
            // Repeated f32 subtraction leaves a residue near zero; swallow it
            // so the pulse ends on the frame `1 / step` predicts.
            self.pulse = if next < step * 1e-3 { 0.0 } else { next };
        }
    }
}
