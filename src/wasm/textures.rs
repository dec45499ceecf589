use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, WebGl2RenderingContext as GL,
    WebGlTexture,
};

use super::dom::dom_error;
use crate::draw::{Face, FaceTextures};
use crate::error::{Error, Result};

const SIZE: u32 = 256;

struct Caption {
    text: &'static str,
    font: &'static str,
    background: &'static str,
    color: &'static str,
}

fn caption(face: Face) -> Caption {
    let font = match face {
        Face::Left => "bold 240px Arial",
        _ => "bold 200px Arial",
    };
    Caption {
        text: "",
        font,
        background: "rgba(0,0,0,0.4)",
        color: "#ffffff",
    }
}

pub fn face_textures(gl: &GL, document: &Document) -> Result<FaceTextures<WebGlTexture>> {
    FaceTextures::try_build(|face| {
        log::debug!("building {} face texture", face.label());
        text_texture(gl, document, &caption(face))
    })
}

/// Renders `caption` centred on an offscreen canvas and uploads it.
fn text_texture(gl: &GL, document: &Document, caption: &Caption) -> Result<WebGlTexture> {
    let canvas = document
        .create_element("canvas")
        .map_err(dom_error)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::Dom("created element is not a canvas".into()))?;
    canvas.set_width(SIZE);
    canvas.set_height(SIZE);

    let ctx = canvas
        .get_context("2d")
        .map_err(dom_error)?
        .ok_or_else(|| Error::ContextUnavailable("2d canvas context".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::ContextUnavailable("unexpected 2d context type".into()))?;

    let size = f64::from(SIZE);
    ctx.set_fill_style_str(caption.background);
    ctx.fill_rect(0.0, 0.0, size, size);
    ctx.set_font(caption.font);
    ctx.set_fill_style_str(caption.color);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(caption.text, size / 2.0, size / 2.0)
        .map_err(dom_error)?;

    let texture = gl
        .create_texture()
        .ok_or_else(|| Error::ContextUnavailable("create_texture returned null".into()))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
    gl.tex_image_2d_with_u32_and_u32_and_html_canvas_element(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        &canvas,
    )
    .map_err(dom_error)?;

    Ok(texture)
}
