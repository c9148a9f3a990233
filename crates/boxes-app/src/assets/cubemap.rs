use std::path::{Path, PathBuf};

use boxes_renderer::CubeFaces;

use super::textures::decode_square;

/// Face file stems in layer order.
const FACE_NAMES: [&str; 6] = [
    "cubemap_posx",
    "cubemap_negx",
    "cubemap_posy",
    "cubemap_negy",
    "cubemap_posz",
    "cubemap_negz",
];

const FACE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Load the six environment faces from `dir`. Any missing or broken face
/// gives `None` and the scene uses its procedural sky.
pub fn load_cubemap(dir: &Path, size: u32) -> Option<CubeFaces> {
    let mut faces: Vec<Vec<u8>> = Vec::with_capacity(6);
    for name in FACE_NAMES {
        let Some(path) = find_face(dir, name) else {
            tracing::warn!(dir = %dir.display(), face = name, "cubemap face missing");
            return None;
        };
        match decode_square(&path, size) {
            Ok(rgba) => faces.push(rgba),
            Err(e) => {
                tracing::warn!("{e}");
                return None;
            }
        }
    }

    let faces: [Vec<u8>; 6] = faces.try_into().ok()?;
    Some(CubeFaces {
        size: size.max(1),
        faces,
    })
}

fn find_face(dir: &Path, name: &str) -> Option<PathBuf> {
    FACE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| path.is_file())
}
