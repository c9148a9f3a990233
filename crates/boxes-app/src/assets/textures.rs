use std::path::Path;

use boxes_common::AssetError;
use boxes_renderer::TextureData;
use image::imageops::FilterType;

use super::{list_files, stem};

/// Decode every PNG/JPEG in `dir`, resized to `size` x `size`, sorted by
/// file name. Files that fail to decode are logged and skipped.
pub fn load_textures(dir: &Path, size: u32) -> Vec<TextureData> {
    list_files(dir, &["png", "jpg", "jpeg"])
        .into_iter()
        .filter_map(|path| match decode_square(&path, size) {
            Ok(rgba) => Some(TextureData {
                name: stem(&path),
                width: size,
                height: size,
                rgba,
            }),
            Err(e) => {
                tracing::warn!("{e}");
                None
            }
        })
        .collect()
}

/// Decode an image and resize it to a `size` square of RGBA8 pixels.
pub(super) fn decode_square(path: &Path, size: u32) -> Result<Vec<u8>, AssetError> {
    let image = image::open(path).map_err(|e| AssetError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let size = size.max(1);
    let image = if image.width() == size && image.height() == size {
        image
    } else {
        image.resize_exact(size, size, FilterType::Triangle)
    };
    Ok(image.to_rgba8().into_raw())
}
