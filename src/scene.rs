//! Frame state shared by input handlers and the frame loop.
//!
//! The backdrop and the cube run on two time bases: the shader's `time`
//! advances a fixed step per frame, while the cube turns by the real elapsed
//! seconds reported by the host.

use crate::clock::FrameClock;
use crate::config::Config;
use crate::mat4::Mat4;
use crate::particles::ParticleField;
use crate::pointer::PointerState;
use crate::uniforms::{BackdropUniforms, CubeUniforms, ParticleUniforms};

const Z_AXIS: [f32; 3] = [0.0, 0.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropFrame {
    pub backdrop: BackdropUniforms,
    pub particles: ParticleUniforms,
}

#[derive(Debug, Clone)]
pub struct FrameState {
    pub pointer: PointerState,
    pub particles: ParticleField,
    clock: FrameClock,
    rotation: f64,
    shader_time: f32,
    resolution: [f32; 2],
}

impl FrameState {
    pub fn new(config: &Config, resolution: [f32; 2], random: impl FnMut() -> f32) -> Self {
        Self {
            pointer: PointerState::new(),
            particles: ParticleField::new(config.particle_count, random),
            clock: FrameClock::new(),
            rotation: 0.0,
            shader_time: 0.0,
            resolution,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn shader_time(&self) -> f32 {
        self.shader_time
    }

    pub fn resolution(&self) -> [f32; 2] {
        self.resolution
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.resolution = [width, height];
    }

    /// One backdrop frame: advance shader time, snapshot the pointer, then
    /// decay velocity and pulse and move the particles.
    ///
    /// The velocity uniform carries the value from before this frame's
    /// decay; the pulse uniform carries the value after it.
    pub fn advance_backdrop(
        &mut self,
        config: &Config,
        random: impl FnMut() -> f32,
    ) -> BackdropFrame {
        self.shader_time += config.shader_time_step;
        let mouse = self.pointer.current.to_array();
        let mouse_velocity = self.pointer.velocity;

        self.pointer.decay(config);
        self.particles.step(config, random);

        let backdrop = BackdropUniforms {
            time: self.shader_time,
            resolution: self.resolution,
            mouse,
            mouse_velocity,
            pulse: self.pointer.pulse,
        };
        BackdropFrame {
            backdrop,
            particles: self.particle_uniforms(config),
        }
    }

    fn particle_uniforms(&self, config: &Config) -> ParticleUniforms {
        let [width, height] = self.resolution;
        let projection = Mat4::perspective(
            config.backdrop_fov_radians(),
            width / height,
            config.backdrop_near,
            config.backdrop_far,
        );

        let mut model_view = Mat4::identity();
        model_view.translate([0.0, 0.0, -config.backdrop_camera_z]);
        if let Err(err) = model_view.rotate(self.particles.rotation(), Z_AXIS) {
            log::warn!("particle spin skipped: {err}");
        }

        ParticleUniforms {
            projection,
            model_view,
            point_size: config.particle_size,
            viewport_height: height,
        }
    }

    /// One cube frame at host time `now` (seconds).
    ///
    /// Builds fresh matrices and composes translate, scale, rotate in that
    /// order so the cube spins in place. A degenerate rotation axis leaves the
    /// cube unrotated for this frame.
    pub fn advance_cube(&mut self, now: f64, aspect: f32, config: &Config) -> CubeUniforms {
        let delta = self.clock.tick(now);
        self.rotation += delta;

        let projection = Mat4::perspective(config.fov_radians(), aspect, config.near, config.far);

        let mut model_view = Mat4::identity();
        model_view.translate(config.cube_offset);
        model_view.scale(config.cube_scale);
        if let Err(err) = model_view.rotate(self.rotation as f32, config.rotation_axis) {
            log::warn!("cube rotation skipped: {err}");
        }

        CubeUniforms {
            projection,
            model_view,
        }
    }
}
