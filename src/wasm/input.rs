//! DOM listeners. They only touch pointer and resolution state; all GL work
//! happens in the frame callback.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent, TouchEvent, Window};

use super::backdrop::BackdropPass;
use super::dom::{dom_error, viewport};
use crate::error::Result;
use crate::pointer::PointerSample;
use crate::scene::FrameState;

/// Registers `handler` for the lifetime of the page.
fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

fn sample(window: &Window, client_x: i32, client_y: i32) -> Option<PointerSample> {
    let (w, h) = viewport(window).ok()?;
    Some(PointerSample::from_client(client_x as f32, client_y as f32, w, h))
}

fn first_touch(window: &Window, event: &TouchEvent) -> Option<PointerSample> {
    let touch = event.touches().get(0)?;
    sample(window, touch.client_x(), touch.client_y())
}

pub fn attach_pointer(window: &Window, state: &Rc<RefCell<FrameState>>) -> Result<()> {
    let document: EventTarget = super::dom::document(window)?.into();

    {
        let (window, state) = (window.clone(), state.clone());
        listen(&document, "mousemove", move |e: MouseEvent| {
            if let Some(s) = sample(&window, e.client_x(), e.client_y()) {
                state.borrow_mut().pointer.move_to(s);
            }
        })?;
    }
    {
        let state = state.clone();
        listen(&document, "mousedown", move |_: MouseEvent| {
            state.borrow_mut().pointer.press();
        })?;
    }
    {
        let state = state.clone();
        listen(&document, "mouseup", move |_: MouseEvent| {
            state.borrow_mut().pointer.release();
        })?;
    }
    {
        let (window, state) = (window.clone(), state.clone());
        listen(&document, "touchstart", move |e: TouchEvent| {
            if let Some(s) = first_touch(&window, &e) {
                state.borrow_mut().pointer.touch_start(s);
            }
        })?;
    }
    {
        let (window, state) = (window.clone(), state.clone());
        listen(&document, "touchmove", move |e: TouchEvent| {
            if let Some(s) = first_touch(&window, &e) {
                state.borrow_mut().pointer.move_to(s);
            }
        })?;
    }
    {
        let state = state.clone();
        listen(&document, "touchend", move |_: TouchEvent| {
            state.borrow_mut().pointer.release();
        })?;
    }
    Ok(())
}

/// Keeps the backdrop canvas and its `resolution` uniform in step with the
/// window.
pub fn attach_resize(
    window: &Window,
    backdrop: &Rc<RefCell<BackdropPass>>,
    state: &Rc<RefCell<FrameState>>,
) -> Result<()> {
    let target: EventTarget = window.clone().into();
    let (window, backdrop, state) = (window.clone(), backdrop.clone(), state.clone());
    listen(&target, "resize", move |_: web_sys::Event| {
        match viewport(&window) {
            Ok((w, h)) => {
                let ratio = window.device_pixel_ratio() as f32;
                let [width, height] = backdrop.borrow().resize(w, h, ratio);
                state.borrow_mut().resize(width, height);
            }
            Err(err) => log::error!("resize: {err}"),
        }
    })
}
