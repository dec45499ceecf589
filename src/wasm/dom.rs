use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::error::{Error, Result};

pub fn dom_error(value: JsValue) -> Error {
    Error::Dom(format!("{value:?}"))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::ContextUnavailable("no window".into()))
}

pub fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| Error::ContextUnavailable("no document".into()))
}

pub fn canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::ContextUnavailable(format!("canvas #{id} not found")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::ContextUnavailable(format!("#{id} is not a canvas")))
}

/// Window size in CSS pixels.
pub fn viewport(window: &Window) -> Result<(f32, f32)> {
    let w = window.inner_width().map_err(dom_error)?.as_f64().unwrap_or(0.0);
    let h = window.inner_height().map_err(dom_error)?.as_f64().unwrap_or(0.0);
    Ok((w as f32, h as f32))
}
