use glam::{Mat4, Vec3};

/// One face of a cube map, in layer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl CubeFace {
    /// All faces in render and layer order: +X, -X, +Y, -Y, +Z, -Z.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    pub fn layer(self) -> u32 {
        self as u32
    }

    /// Direction the face camera looks along and its up vector.
    fn basis(self) -> (Vec3, Vec3) {
        match self {
            CubeFace::PosX => (Vec3::X, Vec3::NEG_Y),
            CubeFace::NegX => (Vec3::NEG_X, Vec3::NEG_Y),
            CubeFace::PosY => (Vec3::Y, Vec3::Z),
            CubeFace::NegY => (Vec3::NEG_Y, Vec3::NEG_Z),
            CubeFace::PosZ => (Vec3::Z, Vec3::NEG_Y),
            CubeFace::NegZ => (Vec3::NEG_Z, Vec3::NEG_Y),
        }
    }

    /// View rotation of the face camera at the origin.
    pub fn rotation(self) -> Mat4 {
        let (forward, up) = self.basis();
        Mat4::look_to_rh(Vec3::ZERO, forward, up)
    }

    /// View matrix of the face camera placed at `center`.
    pub fn view(self, center: Vec3) -> Mat4 {
        self.rotation() * Mat4::from_translation(-center)
    }
}
