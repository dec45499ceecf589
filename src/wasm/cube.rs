use web_sys::{Document, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlTexture};

use super::dom::dom_error;
use super::gl::{bind_attribute, index_buffer, static_f32_buffer, Program};
use super::shaders::{CUBE_FS, CUBE_VS};
use super::textures::face_textures;
use crate::draw::{draw_cube, CubeContext, FaceTextures};
use crate::error::Result;
use crate::mesh;
use crate::uniforms::{names, CubeUniforms, UniformSink};

const UNIFORMS: &[&str] = &[
    names::PROJECTION,
    names::MODEL_VIEW,
    names::SAMPLER,
    names::USE_TEXTURE,
];

/// Textured cube drawn onto its own canvas.
pub struct CubePass {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: Program,
    position: (WebGlBuffer, u32),
    color: (WebGlBuffer, u32),
    texture_coord: (WebGlBuffer, u32),
    indices: WebGlBuffer,
    textures: FaceTextures<WebGlTexture>,
}

impl CubePass {
    pub fn new(gl: GL, canvas: HtmlCanvasElement, document: &Document) -> Result<Self> {
        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        let program = Program::new(&gl, CUBE_VS, CUBE_FS, UNIFORMS)?;
        let position = (
            static_f32_buffer(&gl, &mesh::POSITIONS)?,
            program.attribute("aVertexPosition")?,
        );
        let color = (
            static_f32_buffer(&gl, &mesh::vertex_colors())?,
            program.attribute("aVertexColor")?,
        );
        let texture_coord = (
            static_f32_buffer(&gl, &mesh::texture_coords())?,
            program.attribute("aTextureCoord")?,
        );
        let indices = index_buffer(&gl, &mesh::indices())?;
        let textures = face_textures(&gl, document)?;

        let style = canvas.style();
        for (property, value) in [
            ("width", "50vw"),
            ("height", "50vh"),
            ("position", "absolute"),
            ("top", "50%"),
            ("left", "50%"),
            ("transform", "translate(-50%, -50%)"),
            ("z-index", "1"),
        ] {
            style.set_property(property, value).map_err(dom_error)?;
        }

        Ok(Self {
            gl,
            canvas,
            program,
            position,
            color,
            texture_coord,
            indices,
            textures,
        })
    }

    /// Matches the drawing buffer to the canvas' CSS size and returns the
    /// aspect ratio for this frame.
    pub fn sync_size(&self) -> f32 {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
        width as f32 / height as f32
    }

    pub fn render(&mut self, uniforms: &CubeUniforms) {
        let gl = &self.gl;
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear_depth(1.0);
        gl.enable(GL::DEPTH_TEST);
        gl.depth_func(GL::LEQUAL);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        bind_attribute(gl, &self.position.0, self.position.1, 3);
        bind_attribute(gl, &self.color.0, self.color.1, 4);
        bind_attribute(gl, &self.texture_coord.0, self.texture_coord.1, 2);
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&self.indices));

        self.program.activate();
        uniforms.feed(&mut self.program);

        let mut faces = FaceDraw {
            gl,
            program: &mut self.program,
        };
        draw_cube(&mut faces, &self.textures);
    }
}

struct FaceDraw<'a> {
    gl: &'a GL,
    program: &'a mut Program,
}

impl CubeContext for FaceDraw<'_> {
    type Texture = WebGlTexture;

    fn bind_face_texture(&mut self, texture: &WebGlTexture) {
        self.gl.active_texture(GL::TEXTURE0);
        self.gl.bind_texture(GL::TEXTURE_2D, Some(texture));
    }

    fn set_sampler_unit(&mut self, unit: i32) {
        self.program.set_int(names::SAMPLER, unit);
    }

    fn set_use_texture(&mut self, enabled: bool) {
        self.program.set_bool(names::USE_TEXTURE, enabled);
    }

    fn draw_indexed(&mut self, count: i32, byte_offset: i32) {
        self.gl
            .draw_elements_with_i32(GL::TRIANGLES, count, GL::UNSIGNED_SHORT, byte_offset);
    }
}
