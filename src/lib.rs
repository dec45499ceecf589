//! Pointer-reactive shader backdrop and a spinning textured cube for the
//! browser.
//!
//! The math and per-frame state live in plain modules that build and test on
//! any target. The WebGL and DOM glue in `wasm` only compiles for wasm32.

pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod mat4;
pub mod mesh;
pub mod particles;
pub mod pointer;
pub mod scene;
pub mod schedule;
pub mod uniforms;

pub use config::Config;
pub use error::{Error, Result};
pub use mat4::Mat4;
pub use scene::FrameState;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::schedule::StopSignal;

    mod backdrop;
    mod cube;
    mod dom;
    mod gl;
    mod input;
    mod render;
    mod shaders;
    mod textures;

    thread_local! {
        static STOP: StopSignal = StopSignal::new();
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("ripple_wasm starting");

        let stop = STOP.with(StopSignal::clone);
        render::start(crate::Config::default(), stop).map_err(|err| {
            log::error!("startup failed: {err}");
            JsValue::from(err)
        })
    }

    /// Ends the animation loop after the current frame.
    #[wasm_bindgen]
    pub fn stop() {
        STOP.with(StopSignal::stop);
    }
}
