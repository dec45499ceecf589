use std::collections::HashMap;

use js_sys::{Float32Array, Uint16Array};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

use super::dom::dom_error;
use crate::error::{Error, Result};
use crate::mat4::Mat4;
use crate::uniforms::UniformSink;

pub fn context(canvas: &HtmlCanvasElement) -> Result<GL> {
    canvas
        .get_context("webgl2")
        .map_err(dom_error)?
        .ok_or_else(|| Error::ContextUnavailable("WebGL2 not supported".into()))?
        .dyn_into::<GL>()
        .map_err(|_| Error::ContextUnavailable("unexpected context type".into()))
}

pub fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| Error::ShaderCompile("create_shader returned null".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        log::error!("shader compile failed: {info}");
        Err(Error::ShaderCompile(info))
    }
}

pub fn link_program(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| Error::ProgramLink("create_program returned null".into()))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);

    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        log::error!("program link failed: {info}");
        Err(Error::ProgramLink(info))
    }
}

pub fn static_f32_buffer(gl: &GL, data: &[f32]) -> Result<WebGlBuffer> {
    let buffer = create_buffer(gl)?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &Float32Array::from(data),
        GL::STATIC_DRAW,
    );
    Ok(buffer)
}

pub fn index_buffer(gl: &GL, data: &[u16]) -> Result<WebGlBuffer> {
    let buffer = create_buffer(gl)?;
    gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ELEMENT_ARRAY_BUFFER,
        &Uint16Array::from(data),
        GL::STATIC_DRAW,
    );
    Ok(buffer)
}

pub fn create_buffer(gl: &GL) -> Result<WebGlBuffer> {
    gl.create_buffer()
        .ok_or_else(|| Error::ContextUnavailable("create_buffer returned null".into()))
}

/// Binds `buffer` to `location` as tightly packed floats.
pub fn bind_attribute(gl: &GL, buffer: &WebGlBuffer, location: u32, components: i32) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(location);
}

/// A linked program with its uniform locations resolved up front.
pub struct Program {
    gl: GL,
    program: WebGlProgram,
    uniforms: HashMap<&'static str, WebGlUniformLocation>,
}

impl Program {
    pub fn new(gl: &GL, vs: &str, fs: &str, uniforms: &[&'static str]) -> Result<Self> {
        let vs = compile_shader(gl, GL::VERTEX_SHADER, vs)?;
        let fs = compile_shader(gl, GL::FRAGMENT_SHADER, fs)?;
        let program = link_program(gl, &vs, &fs)?;

        let mut locations = HashMap::with_capacity(uniforms.len());
        for &name in uniforms {
            let location = gl
                .get_uniform_location(&program, name)
                .ok_or(Error::MissingUniform(name))?;
            locations.insert(name, location);
        }

        Ok(Self {
            gl: gl.clone(),
            program,
            uniforms: locations,
        })
    }

    pub fn attribute(&self, name: &'static str) -> Result<u32> {
        self.gl
            .get_attrib_location(&self.program, name)
            .try_into()
            .map_err(|_| Error::MissingAttribute(name))
    }

    pub fn activate(&self) {
        self.gl.use_program(Some(&self.program));
    }

    fn location(&self, name: &'static str) -> Option<&WebGlUniformLocation> {
        self.uniforms.get(name)
    }
}

impl UniformSink for Program {
    fn set_float(&mut self, name: &'static str, value: f32) {
        self.gl.uniform1f(self.location(name), value);
    }

    fn set_vec2(&mut self, name: &'static str, [x, y]: [f32; 2]) {
        self.gl.uniform2f(self.location(name), x, y);
    }

    fn set_mat4(&mut self, name: &'static str, value: &Mat4) {
        self.gl
            .uniform_matrix4fv_with_f32_array(self.location(name), false, value.as_slice());
    }

    fn set_int(&mut self, name: &'static str, value: i32) {
        self.gl.uniform1i(self.location(name), value);
    }
}
