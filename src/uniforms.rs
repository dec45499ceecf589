//! Per-frame uniform payloads and the sink they are written into.

use crate::mat4::Mat4;

/// Anything that accepts named shader inputs. The WebGL program wrapper is
/// the real implementation; tests record the calls instead.
pub trait UniformSink {
    fn set_float(&mut self, name: &'static str, value: f32);
    fn set_vec2(&mut self, name: &'static str, value: [f32; 2]);
    fn set_mat4(&mut self, name: &'static str, value: &Mat4);
    fn set_int(&mut self, name: &'static str, value: i32);

    fn set_bool(&mut self, name: &'static str, value: bool) {
        self.set_int(name, value as i32);
    }
}

pub mod names {
    pub const TIME: &str = "time";
    pub const RESOLUTION: &str = "resolution";
    pub const MOUSE: &str = "mouse";
    pub const MOUSE_VELOCITY: &str = "mouseVelocity";
    pub const PULSE: &str = "pulse";

    pub const PROJECTION: &str = "uProjectionMatrix";
    pub const MODEL_VIEW: &str = "uModelViewMatrix";
    pub const SAMPLER: &str = "uSampler";
    pub const USE_TEXTURE: &str = "uUseTexture";

    pub const POINT_SIZE: &str = "uPointSize";
    pub const VIEWPORT_HEIGHT: &str = "uViewportHeight";
}

/// Inputs of the ripple backdrop shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropUniforms {
    pub time: f32,
    pub resolution: [f32; 2],
    pub mouse: [f32; 2],
    pub mouse_velocity: [f32; 2],
    pub pulse: f32,
}

impl BackdropUniforms {
    pub fn feed(&self, sink: &mut impl UniformSink) {
        sink.set_float(names::TIME, self.time);
        sink.set_vec2(names::RESOLUTION, self.resolution);
        sink.set_vec2(names::MOUSE, self.mouse);
        sink.set_vec2(names::MOUSE_VELOCITY, self.mouse_velocity);
        sink.set_float(names::PULSE, self.pulse);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeUniforms {
    pub projection: Mat4,
    pub model_view: Mat4,
}

impl CubeUniforms {
    pub fn feed(&self, sink: &mut impl UniformSink) {
        sink.set_mat4(names::PROJECTION, &self.projection);
        sink.set_mat4(names::MODEL_VIEW, &self.model_view);
    }
}

/// Inputs of the particle point shader. `point_size` is in world units and is
/// attenuated by depth in the vertex shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleUniforms {
    pub projection: Mat4,
    pub model_view: Mat4,
    pub point_size: f32,
    pub viewport_height: f32,
}

impl ParticleUniforms {
    pub fn feed(&self, sink: &mut impl UniformSink) {
        sink.set_mat4(names::PROJECTION, &self.projection);
        sink.set_mat4(names::MODEL_VIEW, &self.model_view);
        sink.set_float(names::POINT_SIZE, self.point_size);
        sink.set_float(names::VIEWPORT_HEIGHT, self.viewport_height);
    }
}
