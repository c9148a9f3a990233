//! Decoded inputs the scene is built from. Loading them from disk is the
//! host's job; the scene only needs bytes and names.

use tracing::warn;

use crate::reflection::CubeFace;

/// Edge length of the fallback checker texture.
pub const CHECKER_SIZE: u32 = 64;

/// Edge length of the noise volume.
pub const NOISE_SIZE: u32 = 128;

/// Edge length of the procedural sky.
const SKY_SIZE: u32 = 64;

#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub name: String,
    pub source: String,
}

/// Tightly packed RGBA8 image.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && rgba_len(&[self.width, self.height]) == Some(self.rgba.len())
    }
}

/// Six square RGBA8 faces in layer order +X, -X, +Y, -Y, +Z, -Z.
#[derive(Debug, Clone)]
pub struct CubeFaces {
    pub size: u32,
    pub faces: [Vec<u8>; 6],
}

impl CubeFaces {
    pub fn is_valid(&self) -> bool {
        let face_len = rgba_len(&[self.size, self.size]);
        self.size > 0 && self.faces.iter().all(|f| Some(f.len()) == face_len)
    }
}

/// Byte length of an RGBA8 block with these extents, `None` on overflow.
fn rgba_len(extents: &[u32]) -> Option<usize> {
    extents
        .iter()
        .try_fold(4usize, |len, &e| len.checked_mul(e as usize))
}

/// Cubical RGBA8 volume sampled as 3D noise.
#[derive(Debug, Clone)]
pub struct NoiseVolume {
    pub size: u32,
    pub rgba: Vec<u8>,
}

impl NoiseVolume {
    pub fn is_valid(&self) -> bool {
        self.size > 0 && rgba_len(&[self.size; 3]) == Some(self.rgba.len())
    }

    /// Mid-grey volume used when no noise was supplied.
    pub fn flat(size: u32) -> Self {
        let size = size.max(1);
        let len = (size as usize).pow(3) * 4;
        Self { size, rgba: vec![128; len] }
    }
}

/// Everything [`SceneRenderer::create`](super::SceneRenderer::create) needs.
#[derive(Debug, Clone)]
pub struct SceneAssets {
    pub base: ShaderSource,
    pub variants: Vec<ShaderSource>,
    pub textures: Vec<TextureData>,
    pub environment: Option<CubeFaces>,
    pub noise: Option<NoiseVolume>,
}

impl SceneAssets {
    /// Drop malformed textures and those larger than `max_extent`, and fall
    /// back to a checker when none are left, so there is always a texture
    /// to select.
    pub fn usable_textures(&self, max_extent: u32) -> Vec<TextureData> {
        let mut textures: Vec<TextureData> = self
            .textures
            .iter()
            .filter(|t| {
                if !t.is_valid() {
                    warn!(texture = %t.name, "texture has inconsistent size, skipping");
                    return false;
                }
                if t.width > max_extent || t.height > max_extent {
                    warn!(texture = %t.name, width = t.width, height = t.height, max_extent, "texture exceeds device limit, skipping");
                    return false;
                }
                true
            })
            .cloned()
            .collect();
        if textures.is_empty() {
            warn!("no textures loaded, using a checker pattern");
            textures.push(checker_texture());
        }
        textures
    }

    pub fn usable_environment(&self, max_extent: u32) -> CubeFaces {
        match &self.environment {
            Some(faces) if faces.is_valid() && faces.size <= max_extent => faces.clone(),
            Some(faces) if faces.is_valid() => {
                warn!(size = faces.size, max_extent, "environment exceeds device limit, using a procedural sky");
                procedural_sky(SKY_SIZE)
            }
            Some(_) => {
                warn!("environment faces have inconsistent sizes, using a procedural sky");
                procedural_sky(SKY_SIZE)
            }
            None => procedural_sky(SKY_SIZE),
        }
    }

    pub fn usable_noise(&self) -> NoiseVolume {
        match &self.noise {
            Some(noise) if noise.is_valid() => noise.clone(),
            _ => {
                warn!("no usable noise volume, using a flat one");
                NoiseVolume::flat(NOISE_SIZE)
            }
        }
    }
}

/// 64x64 two-tone checker with 8 pixel squares.
pub fn checker_texture() -> TextureData {
    let mut rgba = Vec::with_capacity((CHECKER_SIZE * CHECKER_SIZE * 4) as usize);
    for y in 0..CHECKER_SIZE {
        for x in 0..CHECKER_SIZE {
            let v = if ((x / 8) + (y / 8)) % 2 == 0 { 200 } else { 90 };
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
    }
    TextureData {
        name: "checker".to_string(),
        width: CHECKER_SIZE,
        height: CHECKER_SIZE,
        rgba,
    }
}

/// Vertical gradient from ground to zenith, the same on every side.
pub fn procedural_sky(size: u32) -> CubeFaces {
    let size = size.max(1);
    let faces = CubeFace::ALL.map(|face| sky_face(face, size));
    CubeFaces { size, faces }
}

const ZENITH: [f32; 3] = [70.0, 120.0, 200.0];
const HORIZON: [f32; 3] = [190.0, 210.0, 230.0];
const GROUND: [f32; 3] = [60.0, 55.0, 50.0];

fn sky_face(face: CubeFace, size: u32) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for row in 0..size {
        for col in 0..size {
            let s = 2.0 * (col as f32 + 0.5) / size as f32 - 1.0;
            let t = 2.0 * (row as f32 + 0.5) / size as f32 - 1.0;
            let dir = face_direction(face, s, t);
            let height = dir[1] / (dir[0] * dir[0] + dir[1] * dir[1] + dir[2] * dir[2]).sqrt();
            let color = if height >= 0.0 {
                lerp(HORIZON, ZENITH, height)
            } else {
                lerp(HORIZON, GROUND, (-height * 4.0).min(1.0))
            };
            rgba.extend_from_slice(&[color[0] as u8, color[1] as u8, color[2] as u8, 255]);
        }
    }
    rgba
}

/// Direction sampled at face coordinates `s`, `t` in [-1, 1], with `t`
/// growing downwards.
fn face_direction(face: CubeFace, s: f32, t: f32) -> [f32; 3] {
    match face {
        CubeFace::PosX => [1.0, -t, -s],
        CubeFace::NegX => [-1.0, -t, s],
        CubeFace::PosY => [s, 1.0, t],
        CubeFace::NegY => [s, -1.0, -t],
        CubeFace::PosZ => [s, -t, 1.0],
        CubeFace::NegZ => [-s, -t, -1.0],
    }
}

fn lerp(a: [f32; 3], b: [f32; 3], k: f32) -> [f32; 3] {
    [a[0] + (b[0] - a[0]) * k, a[1] + (b[1] - a[1]) * k, a[2] + (b[2] - a[2]) * k]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> SceneAssets {
        SceneAssets {
            base: ShaderSource { name: "basic".into(), source: String::new() },
            variants: Vec::new(),
            textures: Vec::new(),
            environment: None,
            noise: None,
        }
    }

    #[test]
    fn checker_has_expected_shape() {
        let tex = checker_texture();
        assert!(tex.is_valid());
        assert_eq!(tex.width, 64);
        assert_ne!(tex.rgba[0], tex.rgba[8 * 4]);
    }

    #[test]
    fn empty_texture_list_falls_back_to_checker() {
        let textures = assets().usable_textures(u32::MAX);
        assert_eq!(textures.len(), 1);
        assert_eq!(textures[0].name, "checker");
    }

    #[test]
    fn malformed_textures_are_dropped() {
        let mut a = assets();
        a.textures.push(TextureData { name: "short".into(), width: 2, height: 2, rgba: vec![0; 3] });
        a.textures.push(TextureData { name: "ok".into(), width: 1, height: 1, rgba: vec![0; 4] });
        let names: Vec<String> = a.usable_textures(u32::MAX).into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["ok"]);
    }

    #[test]
    fn textures_beyond_the_device_limit_are_dropped() {
        let mut a = assets();
        a.textures.push(TextureData { name: "big".into(), width: 4, height: 2, rgba: vec![0; 32] });
        a.textures.push(TextureData { name: "small".into(), width: 2, height: 2, rgba: vec![0; 16] });
        let names: Vec<String> = a.usable_textures(2).into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["small"]);
    }

    #[test]
    fn environment_beyond_the_device_limit_uses_the_sky() {
        let mut a = assets();
        a.environment = Some(CubeFaces { size: 2, faces: std::array::from_fn(|_| vec![7; 16]) });
        assert_eq!(a.usable_environment(2).faces[0], vec![7; 16]);
        assert_eq!(a.usable_environment(1).size, SKY_SIZE);
    }

    #[test]
    fn oversized_extents_are_invalid_not_overflowing() {
        let tex = TextureData { name: "huge".into(), width: 65536, height: 16384, rgba: Vec::new() };
        assert!(!tex.is_valid());

        let tex = TextureData { name: "huge".into(), width: u32::MAX, height: u32::MAX, rgba: Vec::new() };
        assert!(!tex.is_valid());

        let cube = CubeFaces { size: u32::MAX, faces: Default::default() };
        assert!(!cube.is_valid());

        let noise = NoiseVolume { size: u32::MAX, rgba: Vec::new() };
        assert!(!noise.is_valid());
    }

    #[test]
    fn sky_is_brighter_above_than_below() {
        let sky = procedural_sky(16);
        assert!(sky.is_valid());
        let up = &sky.faces[CubeFace::PosY.layer() as usize];
        let down = &sky.faces[CubeFace::NegY.layer() as usize];
        assert!(up[2] > down[2]);
    }

    #[test]
    fn side_faces_have_sky_in_the_top_row() {
        let sky = procedural_sky(16);
        let face = &sky.faces[CubeFace::PosZ.layer() as usize];
        let top_blue = face[2];
        let bottom_blue = face[(15 * 16) * 4 + 2];
        assert!(top_blue > bottom_blue);
    }

    #[test]
    fn missing_noise_is_flat() {
        let noise = assets().usable_noise();
        assert!(noise.is_valid());
        assert_eq!(noise.size, NOISE_SIZE);
        assert!(noise.rgba.iter().all(|&b| b == 128));
    }
}
