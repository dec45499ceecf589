use ripple_wasm::particles::ParticleField;
use ripple_wasm::uniforms::{names, BackdropUniforms, UniformSink};
use ripple_wasm::{Config, Error, Mat4};

#[derive(Default)]
struct Names(Vec<&'static str>);

impl UniformSink for Names {
    fn set_float(&mut self, name: &'static str, _: f32) {
        self.0.push(name);
    }
    fn set_vec2(&mut self, name: &'static str, _: [f32; 2]) {
        self.0.push(name);
    }
    fn set_mat4(&mut self, name: &'static str, _: &Mat4) {
        self.0.push(name);
    }
    fn set_int(&mut self, name: &'static str, _: i32) {
        self.0.push(name);
    }
}

#[test]
fn backdrop_feeds_every_shader_input() {
    let uniforms = BackdropUniforms {
        time: 0.5,
        resolution: [640.0, 480.0],
        mouse: [0.5, 0.5],
        mouse_velocity: [0.0, 0.0],
        pulse: 0.0,
    };
    let mut sink = Names::default();
    uniforms.feed(&mut sink);
    assert_eq!(
        sink.0,
        vec![
            names::TIME,
            names::RESOLUTION,
            names::MOUSE,
            names::MOUSE_VELOCITY,
            names::PULSE
        ]
    );
}

#[test]
fn particles_spawn_inside_field() {
    let mut values = [0.0, 0.999, 0.5].into_iter().cycle();
    let field = ParticleField::new(10, || values.next().unwrap_or(0.0));
    assert_eq!(field.len(), 10);
    for p in field.positions().chunks(3) {
        assert_eq!(p[0], -2.5);
        assert!((p[1] - 2.495).abs() < 1e-5);
        assert_eq!(p[2], 1.0);
    }
}

#[test]
fn particles_drift_and_respawn_at_back() {
    let config = Config::default();
    let mut field = ParticleField::new(1, || 0.0);
    assert_eq!(field.positions(), &[-2.5, -2.5, 0.0]);

    field.step(&config, || 0.75);
    assert_eq!(field.positions(), &[1.25, 1.25, 2.0]);

    field.step(&config, || 0.0);
    let z = field.positions()[2];
    assert!((z - 1.99).abs() < 1e-6);
    assert!((field.rotation() - 0.002).abs() < 1e-7);
}

#[test]
fn empty_field_is_allowed() {
    let config = Config {
        particle_count: 0,
        ..Config::default()
    };
    let mut field = ParticleField::new(config.particle_count, || 0.5);
    field.step(&config, || 0.5);
    assert!(field.is_empty());
}

#[test]
fn default_config_is_valid() {
    assert_eq!(Config::default().validate(), Ok(()));
}

#[test]
fn config_rejects_bad_frusta() {
    let inverted = Config {
        near: 10.0,
        far: 1.0,
        ..Config::default()
    };
    assert!(matches!(inverted.validate(), Err(Error::InvalidFrustum(_))));

    let zero_near = Config {
        backdrop_near: 0.0,
        ..Config::default()
    };
    assert!(matches!(zero_near.validate(), Err(Error::InvalidFrustum(_))));

    let wide = Config {
        fov_degrees: 180.0,
        ..Config::default()
    };
    assert!(matches!(wide.validate(), Err(Error::InvalidFrustum(_))));

    let stuck = Config {
        pulse_decay_step: 0.0,
        ..Config::default()
    };
    assert!(matches!(stuck.validate(), Err(Error::InvalidConfig(_))));
}
