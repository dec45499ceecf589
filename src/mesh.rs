//! Cube geometry. Faces are laid out in draw order so face `i` owns vertices
//! `4i..4i+4` and indices `6i..6i+6`.

pub const VERTEX_COUNT: usize = 24;
pub const INDEX_COUNT: usize = 36;
pub const INDICES_PER_FACE: usize = 6;

#[rustfmt::skip]
pub const POSITIONS: [f32; VERTEX_COUNT * 3] = [
    // Front
    -1.0, -1.0,  1.0,
     1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,
    -1.0,  1.0,  1.0,
    // Back
    -1.0, -1.0, -1.0,
    -1.0,  1.0, -1.0,
     1.0,  1.0, -1.0,
     1.0, -1.0, -1.0,
    // Top
    -1.0,  1.0, -1.0,
    -1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,
     1.0,  1.0, -1.0,
    // Bottom
    -1.0, -1.0, -1.0,
     1.0, -1.0, -1.0,
     1.0, -1.0,  1.0,
    -1.0, -1.0,  1.0,
    // Right
     1.0, -1.0, -1.0,
     1.0,  1.0, -1.0,
     1.0,  1.0,  1.0,
     1.0, -1.0,  1.0,
    // Left
    -1.0, -1.0, -1.0,
    -1.0, -1.0,  1.0,
    -1.0,  1.0,  1.0,
    -1.0,  1.0, -1.0,
];

/// Per-vertex RGBA with each position component remapped from `[-1, 1]` to
/// `[0, 1]`.
pub fn vertex_colors() -> Vec<f32> {
    POSITIONS
        .chunks_exact(3)
        .flat_map(|p| [(p[0] + 1.0) / 2.0, (p[1] + 1.0) / 2.0, (p[2] + 1.0) / 2.0, 1.0])
        .collect()
}

/// Every face maps the whole texture.
pub fn texture_coords() -> Vec<f32> {
    const QUAD: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    QUAD.iter().copied().cycle().take(VERTEX_COUNT * 2).collect()
}

/// Two triangles per face: `(b, b+1, b+2)` and `(b, b+2, b+3)`.
pub fn indices() -> Vec<u16> {
    (0..(VERTEX_COUNT / 4) as u16)
        .flat_map(|face| {
            let b = face * 4;
            [b, b + 1, b + 2, b, b + 2, b + 3]
        })
        .collect()
}

/// Clip-space quad covering the viewport, drawn as a triangle strip.
#[rustfmt::skip]
pub const FULLSCREEN_QUAD: [f32; 12] = [
    -1.0, -1.0, 0.0,
     1.0, -1.0, 0.0,
    -1.0,  1.0, 0.0,
     1.0,  1.0, 0.0,
];
