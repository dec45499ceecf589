use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use super::backdrop::BackdropPass;
use super::cube::CubePass;
use super::dom::{canvas, document, dom_error, viewport};
use super::gl::context;
use super::input::{attach_pointer, attach_resize};
use crate::config::Config;
use crate::error::Result;
use crate::scene::FrameState;
use crate::schedule::{FrameLoop, StopSignal};

fn random() -> f32 {
    js_sys::Math::random() as f32
}

/// Acquires both canvases, wires input, and starts the frame loop.
pub fn start(config: Config, stop: StopSignal) -> Result<()> {
    config.validate()?;
    let window = super::dom::window()?;
    let document = document(&window)?;

    let backdrop_canvas = canvas(&document, config.backdrop_canvas_id)?;
    let backdrop = BackdropPass::new(context(&backdrop_canvas)?, backdrop_canvas)?;
    let (w, h) = viewport(&window)?;
    let resolution = backdrop.resize(w, h, window.device_pixel_ratio() as f32);
    log::info!("backdrop ready at {}x{}", resolution[0], resolution[1]);

    let cube_canvas = canvas(&document, config.cube_canvas_id)?;
    let cube = CubePass::new(context(&cube_canvas)?, cube_canvas, &document)?;
    log::info!("cube ready");

    let state = Rc::new(RefCell::new(FrameState::new(&config, resolution, random)));
    let backdrop = Rc::new(RefCell::new(backdrop));
    attach_pointer(&window, &state)?;
    attach_resize(&window, &backdrop, &state)?;

    run(window, config, state, backdrop, cube, FrameLoop::new(stop))
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn run(
    window: Window,
    config: Config,
    state: Rc<RefCell<FrameState>>,
    backdrop: Rc<RefCell<BackdropPass>>,
    mut cube: CubePass,
    mut frames: FrameLoop,
) -> Result<()> {
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself until the stop signal is raised.
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let scheduler = window.clone();

    *g.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let again = frames.tick(|| {
            let mut state = state.borrow_mut();
            let frame = state.advance_backdrop(&config, random);
            backdrop.borrow_mut().render(&frame, state.particles.positions());

            let aspect = cube.sync_size();
            let uniforms = state.advance_cube(now_ms * 0.001, aspect, &config);
            cube.render(&uniforms);
        });

        if !again {
            log::info!("frame loop stopped after {} frames", frames.frames());
            return;
        }
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = scheduler.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame: {err:?}");
            }
        }
    }));

    if let Some(callback) = g.borrow().as_ref() {
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(dom_error)?;
    }
    Ok(())
}
