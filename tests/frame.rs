use ripple_wasm::clock::FrameClock;
use ripple_wasm::pointer::PointerSample;
use ripple_wasm::schedule::{FrameLoop, StopSignal};
use ripple_wasm::{Config, FrameState, Mat4};

/// Deterministic stand-in for `Math.random`.
fn lcg(seed: u32) -> impl FnMut() -> f32 {
    let mut state = seed;
    move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 8) as f32 / (1u32 << 24) as f32
    }
}

fn state(config: &Config) -> FrameState {
    FrameState::new(config, [800.0, 600.0], lcg(7))
}

#[test]
fn clock_first_delta_is_first_timestamp() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(1.5), 1.5);
    assert_eq!(clock.tick(1.75), 0.25);
    assert_eq!(clock.previous(), 1.75);
}

#[test]
fn cube_rotation_accumulates_real_delta() {
    let config = Config::default();
    let mut frame = state(&config);

    frame.advance_cube(0.5, 1.0, &config);
    frame.advance_cube(0.75, 1.0, &config);
    frame.advance_cube(2.0, 1.0, &config);
    assert!((frame.rotation() - 2.0).abs() < 1e-12);
}

#[test]
fn cube_uniforms_follow_fixed_composition() {
    let config = Config::default();
    let mut frame = state(&config);
    let uniforms = frame.advance_cube(0.8, 1.5, &config);

    let mut expected = Mat4::identity();
    expected.translate([0.0, 0.0, -6.0]);
    expected.scale([0.5, 0.5, 0.5]);
    expected.rotate(0.8, [0.5, 1.0, 0.5]).unwrap();
    assert!(uniforms.model_view.approx_eq(&expected, 1e-6));

    let projection = Mat4::perspective(45f32.to_radians(), 1.5, 0.1, 100.0);
    assert_eq!(uniforms.projection, projection);
}

#[test]
fn degenerate_axis_skips_rotation_only() {
    let config = Config {
        rotation_axis: [0.0, 0.0, 0.0],
        ..Config::default()
    };
    let mut frame = state(&config);
    let uniforms = frame.advance_cube(1.0, 1.0, &config);

    let mut expected = Mat4::identity();
    expected.translate([0.0, 0.0, -6.0]);
    expected.scale([0.5, 0.5, 0.5]);
    assert_eq!(uniforms.model_view, expected);
    assert_eq!(frame.rotation(), 1.0);
}

#[test]
fn shader_time_uses_fixed_step() {
    let config = Config::default();
    let mut frame = state(&config);
    let mut random = lcg(1);

    let mut last = 0.0;
    for _ in 0..10 {
        last = frame.advance_backdrop(&config, &mut random).backdrop.time;
    }
    assert!((last - 0.1).abs() < 1e-6);
    assert_eq!(frame.shader_time(), last);
}

#[test]
fn backdrop_snapshots_velocity_before_decay() {
    let config = Config::default();
    let mut frame = state(&config);
    let mut random = lcg(2);
    frame.pointer.move_to(PointerSample::new(0.7, 0.5));
    frame.pointer.press();

    let out = frame.advance_backdrop(&config, &mut random).backdrop;
    assert_eq!(out.mouse, [0.7, 0.5]);
    assert!((out.mouse_velocity[0] - 0.2).abs() < 1e-6);
    assert!((out.pulse - 0.98).abs() < 1e-6);
    assert!((frame.pointer.velocity[0] - 0.2 * 0.95).abs() < 1e-6);
    assert_eq!(out.resolution, [800.0, 600.0]);
}

#[test]
fn resize_updates_resolution_uniform() {
    let config = Config::default();
    let mut frame = state(&config);
    let mut random = lcg(3);
    frame.resize(1920.0, 1080.0);

    let out = frame.advance_backdrop(&config, &mut random);
    assert_eq!(out.backdrop.resolution, [1920.0, 1080.0]);
    assert_eq!(out.particles.viewport_height, 1080.0);
}

#[test]
fn particle_view_sits_in_front_of_camera() {
    let config = Config::default();
    let mut frame = state(&config);
    let mut random = lcg(4);
    let out = frame.advance_backdrop(&config, &mut random).particles;

    let origin = out.model_view.transform([0.0, 0.0, 0.0, 1.0]);
    assert_eq!(&origin[..3], &[0.0, 0.0, -1.0]);
    assert_eq!(out.point_size, 0.05);
}

#[test]
fn frame_loop_runs_until_stopped() {
    let stop = StopSignal::new();
    let mut frames = FrameLoop::new(stop.clone());
    let mut ran = 0;

    assert!(frames.tick(|| ran += 1));
    assert!(frames.tick(|| ran += 1));
    stop.stop();
    assert!(!frames.tick(|| ran += 1));
    assert_eq!(ran, 2);
    assert_eq!(frames.frames(), 2);
}

#[test]
fn stop_raised_mid_frame_ends_after_that_frame() {
    let mut frames = FrameLoop::default();
    let stop = frames.stop_signal();
    let mut ran = 0;

    assert!(!frames.tick(|| {
        ran += 1;
        stop.stop();
    }));
    assert!(!frames.tick(|| ran += 1));
    assert_eq!(ran, 1);
}
