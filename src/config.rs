//! Build-time tuning for both effects.

use crate::error::{Error, Result};
use crate::mat4::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Per-frame multiplier applied to pointer velocity.
    pub velocity_decay: f32,
    /// Amount the press pulse loses every frame.
    pub pulse_decay_step: f32,
    /// Fixed increment of the backdrop shader's `time` uniform.
    pub shader_time_step: f32,

    pub rotation_axis: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub cube_offset: Vec3,
    pub cube_scale: Vec3,

    pub particle_count: usize,
    /// Distance a particle falls toward the camera plane each frame.
    pub particle_drift: f32,
    /// Radians the particle field turns about Z each frame.
    pub particle_spin: f32,
    pub particle_size: f32,
    pub backdrop_fov_degrees: f32,
    pub backdrop_near: f32,
    pub backdrop_far: f32,
    pub backdrop_camera_z: f32,

    pub backdrop_canvas_id: &'static str,
    pub cube_canvas_id: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            velocity_decay: 0.95,
            pulse_decay_step: 0.02,
            shader_time_step: 0.01,
            rotation_axis: [0.5, 1.0, 0.5],
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            cube_offset: [0.0, 0.0, -6.0],
            cube_scale: [0.5, 0.5, 0.5],
            particle_count: 100,
            particle_drift: 0.01,
            particle_spin: 0.001,
            particle_size: 0.05,
            backdrop_fov_degrees: 75.0,
            backdrop_near: 0.1,
            backdrop_far: 1000.0,
            backdrop_camera_z: 1.0,
            backdrop_canvas_id: "bg-canvas",
            cube_canvas_id: "glCanvas",
        }
    }
}

impl Config {
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn backdrop_fov_radians(&self) -> f32 {
        self.backdrop_fov_degrees.to_radians()
    }

    /// Checks both frusta. `Mat4::perspective` trusts its inputs, so this runs
    /// once before the first frame.
    pub fn validate(&self) -> Result<()> {
        check_frustum(self.fov_degrees, self.near, self.far)?;
        check_frustum(self.backdrop_fov_degrees, self.backdrop_near, self.backdrop_far)?;
        if self.pulse_decay_step <= 0.0 {
            return Err(Error::InvalidConfig("pulse decay step must be positive"));
        }
        Ok(())
    }
}

fn check_frustum(fov_degrees: f32, near: f32, far: f32) -> Result<()> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(Error::InvalidFrustum("field of view must lie in (0, 180) degrees"));
    }
    if !(near > 0.0) {
        return Err(Error::InvalidFrustum("near plane must be positive"));
    }
    if !(far > near) {
        return Err(Error::InvalidFrustum("far plane must lie beyond near plane"));
    }
    Ok(())
}
