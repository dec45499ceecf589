use js_sys::Float32Array;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer};

use super::gl::{bind_attribute, create_buffer, static_f32_buffer, Program};
use super::shaders::{BACKDROP_FS, BACKDROP_VS, PARTICLE_FS, PARTICLE_VS};
use crate::error::Result;
use crate::mesh::FULLSCREEN_QUAD;
use crate::scene::BackdropFrame;
use crate::uniforms::names;

const BACKDROP_UNIFORMS: &[&str] = &[
    names::TIME,
    names::RESOLUTION,
    names::MOUSE,
    names::MOUSE_VELOCITY,
    names::PULSE,
];

const PARTICLE_UNIFORMS: &[&str] = &[
    names::PROJECTION,
    names::MODEL_VIEW,
    names::POINT_SIZE,
    names::VIEWPORT_HEIGHT,
];

/// Full-viewport ripple shader with the particle layer drawn over it.
pub struct BackdropPass {
    gl: GL,
    canvas: HtmlCanvasElement,
    quad: Program,
    quad_buffer: WebGlBuffer,
    quad_position: u32,
    points: Program,
    point_buffer: WebGlBuffer,
    point_position: u32,
}

impl BackdropPass {
    pub fn new(gl: GL, canvas: HtmlCanvasElement) -> Result<Self> {
        let quad = Program::new(&gl, BACKDROP_VS, BACKDROP_FS, BACKDROP_UNIFORMS)?;
        let quad_position = quad.attribute("position")?;
        let quad_buffer = static_f32_buffer(&gl, &FULLSCREEN_QUAD)?;

        let points = Program::new(&gl, PARTICLE_VS, PARTICLE_FS, PARTICLE_UNIFORMS)?;
        let point_position = points.attribute("position")?;
        let point_buffer = create_buffer(&gl)?;

        Ok(Self {
            gl,
            canvas,
            quad,
            quad_buffer,
            quad_position,
            points,
            point_buffer,
            point_position,
        })
    }

    /// Sizes the drawing buffer in device pixels and returns that size, which
    /// is what `gl_FragCoord` is measured in.
    pub fn resize(&self, css_width: f32, css_height: f32, pixel_ratio: f32) -> [f32; 2] {
        let width = (css_width * pixel_ratio).round().max(1.0) as u32;
        let height = (css_height * pixel_ratio).round().max(1.0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
        [width as f32, height as f32]
    }

    pub fn render(&mut self, frame: &BackdropFrame, particles: &[f32]) {
        let gl = &self.gl;
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        self.quad.activate();
        bind_attribute(gl, &self.quad_buffer, self.quad_position, 3);
        frame.backdrop.feed(&mut self.quad);
        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);

        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.point_buffer));
        gl.buffer_data_with_array_buffer_view(
            GL::ARRAY_BUFFER,
            &Float32Array::from(particles),
            GL::DYNAMIC_DRAW,
        );
        self.points.activate();
        bind_attribute(gl, &self.point_buffer, self.point_position, 3);
        frame.particles.feed(&mut self.points);

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE);
        gl.draw_arrays(GL::POINTS, 0, (particles.len() / 3) as i32);
        gl.disable(GL::BLEND);
    }
}
