//! Column-major 4x4 transforms for the cube pass.
//!
//! Every mutating operation comes in two shapes because `&mut self` can never
//! alias a `&Mat4` argument:
//!
//! - `translate` / `scale` / `rotate` work in place (target is the source).
//! - `translate_from` / `scale_from` / `rotate_from` read a separate source and
//!   copy every column they do not recompute, so the target ends up as a full
//!   transform rather than a partial overwrite.
//!
//! All three compose by right-multiplication, so calling `translate`, `scale`,
//! `rotate` in that order applies rotation first in local space and the
//! translation last in world space.

use std::ops::Index;

use crate::error::{Error, Result};

pub type Vec3 = [f32; 3];

/// Axis lengths below this cannot be normalized.
pub const MIN_AXIS_LENGTH: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.data[i]
    }
}

impl Mat4 {
    pub fn identity() -> Self {
        let mut data = [0.0; 16];
        data[0] = 1.0;
        data[5] = 1.0;
        data[10] = 1.0;
        data[15] = 1.0;
        Self { data }
    }

    /// OpenGL-style right-handed perspective projection.
    ///
    /// Ranges are not checked here; `Config::validate` does that once at
    /// startup. Degenerate inputs produce NaN/Inf entries rather than a panic.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy / 2.0).tan();
        let nf = 1.0 / (near - far);

        let mut data = [0.0; 16];
        data[0] = f / aspect;
        data[5] = f;
        data[10] = (far + near) * nf;
        data[11] = -1.0;
        data[14] = 2.0 * far * near * nf;
        Self { data }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Multiplies a homogeneous column vector.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let m = &self.data;
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = m[row] * v[0] + m[4 + row] * v[1] + m[8 + row] * v[2] + m[12 + row] * v[3];
        }
        out
    }

    pub fn approx_eq(&self, other: &Mat4, eps: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn translate(&mut self, offset: Vec3) {
        let source = *self;
        self.write_translation(&source, offset);
    }

    pub fn translate_from(&mut self, source: &Mat4, offset: Vec3) {
        self.data[..12].copy_from_slice(&source.data[..12]);
        self.write_translation(source, offset);
    }

    pub fn scale(&mut self, factors: Vec3) {
        let source = *self;
        self.write_scaled_basis(&source, factors);
    }

    pub fn scale_from(&mut self, source: &Mat4, factors: Vec3) {
        self.write_scaled_basis(source, factors);
        self.data[12..].copy_from_slice(&source.data[12..]);
    }

    /// Rotates about `axis` by `rad`. On a degenerate axis `self` is untouched.
    pub fn rotate(&mut self, rad: f32, axis: Vec3) -> Result<()> {
        let b = rotation_block(rad, axis)?;
        let source = *self;
        self.write_rotated_block(&source, &b);
        Ok(())
    }

    /// Like [`Mat4::rotate`] but reads `source`; its translation column is
    /// copied through unchanged.
    pub fn rotate_from(&mut self, source: &Mat4, rad: f32, axis: Vec3) -> Result<()> {
        let b = rotation_block(rad, axis)?;
        self.write_rotated_block(source, &b);
        self.data[12..].copy_from_slice(&source.data[12..]);
        Ok(())
    }

    fn write_translation(&mut self, a: &Mat4, [x, y, z]: Vec3) {
        let a = &a.data;
        for row in 0..4 {
            self.data[12 + row] = a[row] * x + a[4 + row] * y + a[8 + row] * z + a[12 + row];
        }
    }

    fn write_scaled_basis(&mut self, a: &Mat4, factors: Vec3) {
        for (col, factor) in factors.iter().enumerate() {
            for row in 0..4 {
                self.data[col * 4 + row] = a.data[col * 4 + row] * factor;
            }
        }
    }

    // Only the upper 3 columns change; column 3 is the caller's business.
    fn write_rotated_block(&mut self, a: &Mat4, b: &[[f32; 3]; 3]) {
        let a = &a.data;
        for (col, bc) in b.iter().enumerate() {
            for row in 0..4 {
                self.data[col * 4 + row] = a[row] * bc[0] + a[4 + row] * bc[1] + a[8 + row] * bc[2];
            }
        }
    }
}

/// Rodrigues rotation as three columns of a 3x3 block.
fn rotation_block(rad: f32, axis: Vec3) -> Result<[[f32; 3]; 3]> {
    let [x, y, z] = axis;
    let length = (x * x + y * y + z * z).sqrt();
    if length < MIN_AXIS_LENGTH {
        return Err(Error::DegenerateAxis { length });
    }
    let inv = 1.0 / length;
    let (x, y, z) = (x * inv, y * inv, z * inv);

    let (s, c) = rad.sin_cos();
    let t = 1.0 - c;

    Ok([
        [x * x * t + c, y * x * t + z * s, z * x * t - y * s],
        [x * y * t - z * s, y * y * t + c, z * y * t + x * s],
        [x * z * t + y * s, y * z * t - x * s, z * z * t + c],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_default() {
        assert_eq!(Mat4::default(), Mat4::identity());
    }

    #[test]
    fn translate_from_copies_basis() {
        let mut source = Mat4::identity();
        source.scale([2.0, 3.0, 4.0]);
        let mut target = Mat4 { data: [9.0; 16] };
        target.translate_from(&source, [1.0, 1.0, 1.0]);
        assert_eq!(&target.data[..12], &source.data[..12]);
        assert_eq!(&target.data[12..], &[2.0, 3.0, 4.0, 1.0]);
    }
}
