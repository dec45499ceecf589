use ripple_wasm::draw::{draw_cube, CubeContext, Face, FaceTextures};
use ripple_wasm::mesh;
use ripple_wasm::uniforms::{names, CubeUniforms, UniformSink};
use ripple_wasm::Mat4;

#[derive(Debug, PartialEq)]
enum Call {
    Bind(&'static str),
    Sampler(i32),
    UseTexture(bool),
    Draw { count: i32, offset: i32 },
}

#[derive(Default)]
struct Recorder(Vec<Call>);

impl CubeContext for Recorder {
    type Texture = &'static str;

    fn bind_face_texture(&mut self, texture: &&'static str) {
        self.0.push(Call::Bind(*texture));
    }

    fn set_sampler_unit(&mut self, unit: i32) {
        self.0.push(Call::Sampler(unit));
    }

    fn set_use_texture(&mut self, enabled: bool) {
        self.0.push(Call::UseTexture(enabled));
    }

    fn draw_indexed(&mut self, count: i32, offset: i32) {
        self.0.push(Call::Draw { count, offset });
    }
}

#[test]
fn faces_draw_in_fixed_order_with_byte_offsets() {
    let textures = FaceTextures::new(["front", "back", "top", "bottom", "right", "left"]);
    let mut ctx = Recorder::default();
    draw_cube(&mut ctx, &textures);

    assert_eq!(ctx.0.len(), 24);
    for (i, call) in ctx.0.chunks(4).enumerate() {
        let face = Face::ALL[i];
        assert_eq!(call[0], Call::Bind(face.label()));
        assert_eq!(call[1], Call::Sampler(0));
        assert_eq!(call[2], Call::UseTexture(true));
        assert_eq!(
            call[3],
            Call::Draw {
                count: 6,
                offset: i as i32 * 12
            }
        );
    }
}

#[test]
fn try_build_stops_at_first_failure() {
    let mut seen = Vec::new();
    let built: Result<FaceTextures<u8>, Face> = FaceTextures::try_build(|face| {
        seen.push(face);
        if face == Face::Top {
            Err(face)
        } else {
            Ok(face.index() as u8)
        }
    });
    assert_eq!(built.unwrap_err(), Face::Top);
    assert_eq!(seen, vec![Face::Front, Face::Back, Face::Top]);
}

#[test]
fn mesh_indices_cover_each_face_quad() {
    let indices = mesh::indices();
    assert_eq!(indices.len(), mesh::INDEX_COUNT);
    assert_eq!(&indices[..6], &[0, 1, 2, 0, 2, 3]);
    assert_eq!(&indices[30..], &[20, 21, 22, 20, 22, 23]);
    assert!(indices.iter().all(|&i| (i as usize) < mesh::VERTEX_COUNT));
}

#[test]
fn vertex_colors_follow_position() {
    let colors = mesh::vertex_colors();
    assert_eq!(colors.len(), mesh::VERTEX_COUNT * 4);
    // front face, first vertex (-1, -1, 1)
    assert_eq!(&colors[..4], &[0.0, 0.0, 1.0, 1.0]);
    // right face, third vertex (1, 1, 1)
    assert_eq!(&colors[18 * 4..19 * 4], &[1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn texture_coords_repeat_per_face() {
    let uv = mesh::texture_coords();
    assert_eq!(uv.len(), mesh::VERTEX_COUNT * 2);
    for face in uv.chunks(8) {
        assert_eq!(face, &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
    }
}

#[derive(Default)]
struct Uniforms(Vec<(&'static str, Vec<f32>)>);

impl UniformSink for Uniforms {
    fn set_float(&mut self, name: &'static str, value: f32) {
        self.0.push((name, vec![value]));
    }

    fn set_vec2(&mut self, name: &'static str, value: [f32; 2]) {
        self.0.push((name, value.to_vec()));
    }

    fn set_mat4(&mut self, name: &'static str, value: &Mat4) {
        self.0.push((name, value.as_slice().to_vec()));
    }

    fn set_int(&mut self, name: &'static str, value: i32) {
        self.0.push((name, vec![value as f32]));
    }
}

#[test]
fn cube_uniforms_feed_both_matrices() {
    let projection = Mat4::perspective(1.0, 1.0, 0.1, 100.0);
    let mut model_view = Mat4::identity();
    model_view.translate([0.0, 0.0, -6.0]);

    let mut sink = Uniforms::default();
    CubeUniforms {
        projection,
        model_view,
    }
    .feed(&mut sink);

    assert_eq!(sink.0.len(), 2);
    assert_eq!(sink.0[0].0, names::PROJECTION);
    assert_eq!(sink.0[0].1, projection.as_slice());
    assert_eq!(sink.0[1].0, names::MODEL_VIEW);
    assert_eq!(sink.0[1].1[14], -6.0);
}

#[test]
fn bool_uniforms_default_to_int() {
    let mut sink = Uniforms::default();
    sink.set_bool(names::USE_TEXTURE, true);
    assert_eq!(sink.0, vec![(names::USE_TEXTURE, vec![1.0])]);
}
