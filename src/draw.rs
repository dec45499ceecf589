//! Per-face cube draws.

use crate::mesh::INDICES_PER_FACE;

/// Bytes per `u16` index.
pub const INDEX_BYTES: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
    Top,
    Bottom,
    Right,
    Left,
}

impl Face {
    /// Draw order. Depth testing resolves overlap, so this never changes.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Left,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn byte_offset(self) -> i32 {
        self.index() as i32 * INDICES_PER_FACE as i32 * INDEX_BYTES
    }

    pub fn label(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Right => "right",
            Face::Left => "left",
        }
    }
}

/// One texture per face, indexed by [`Face::index`].
#[derive(Debug, Clone)]
pub struct FaceTextures<T> {
    textures: [T; 6],
}

impl<T> FaceTextures<T> {
    pub fn new(textures: [T; 6]) -> Self {
        Self { textures }
    }

    /// Builds each face's texture in draw order, stopping at the first error.
    pub fn try_build<E>(mut make: impl FnMut(Face) -> Result<T, E>) -> Result<Self, E> {
        let [a, b, c, d, e, f] = Face::ALL;
        Ok(Self::new([
            make(a)?,
            make(b)?,
            make(c)?,
            make(d)?,
            make(e)?,
            make(f)?,
        ]))
    }

    pub fn get(&self, face: Face) -> &T {
        &self.textures[face.index()]
    }
}

/// The slice of the graphics API a face draw needs. Buffers, attributes and
/// the program are already bound by the caller.
pub trait CubeContext {
    type Texture;

    fn bind_face_texture(&mut self, texture: &Self::Texture);
    fn set_sampler_unit(&mut self, unit: i32);
    fn set_use_texture(&mut self, enabled: bool);
    fn draw_indexed(&mut self, count: i32, byte_offset: i32);
}

pub fn draw_cube<C: CubeContext>(ctx: &mut C, textures: &FaceTextures<C::Texture>) {
    for face in Face::ALL {
        ctx.bind_face_texture(textures.get(face));
        ctx.set_sampler_unit(0);
        ctx.set_use_texture(true);
        ctx.draw_indexed(INDICES_PER_FACE as i32, face.byte_offset());
    }
}
