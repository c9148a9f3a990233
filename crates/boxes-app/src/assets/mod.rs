//! Loading scene assets from disk.
//!
//! Every loader is forgiving: a file that cannot be read or decoded is
//! logged and skipped, and the scene falls back to built-in content. Only
//! the shared vertex stage is required.

mod cubemap;
mod noise;
mod shaders;
mod textures;

pub use cubemap::load_cubemap;
pub use noise::generate_noise;
pub use shaders::{load_base_shader, load_variants};
pub use textures::load_textures;

use boxes_common::AssetError;
use boxes_config::BoxesConfig;
use boxes_platform::AssetPaths;
use boxes_renderer::scene::NOISE_SIZE;
use boxes_renderer::SceneAssets;

/// Gather everything the scene needs. Fails only when the base shader is
/// missing.
pub fn load_scene_assets(paths: &AssetPaths, config: &BoxesConfig) -> Result<SceneAssets, AssetError> {
    let base = load_base_shader(&paths.shaders(), &config.assets.base_shader)?;
    let variants = load_variants(&paths.shaders(), &config.assets.base_shader);
    let textures = load_textures(&paths.textures(), config.assets.texture_size);
    let environment = load_cubemap(&paths.cubemaps(), config.assets.environment_size);
    let noise = generate_noise(NOISE_SIZE, config.assets.noise_seed);

    tracing::info!(
        root = %paths.root.display(),
        variants = variants.len(),
        textures = textures.len(),
        environment = environment.is_some(),
        "assets loaded"
    );

    Ok(SceneAssets {
        base,
        variants,
        textures,
        environment,
        noise: Some(noise),
    })
}

/// File stem as a display name.
fn stem(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Files in `dir` with one of `extensions`, sorted by file name. A missing
/// directory yields nothing.
fn list_files(dir: &std::path::Path, extensions: &[&str]) -> Vec<std::path::PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), "cannot list directory: {e}");
            return Vec::new();
        }
    };

    let mut files: Vec<std::path::PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| extensions.iter().any(|want| ext.eq_ignore_ascii_case(want)))
                .unwrap_or(false)
        })
        .collect();
    files.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.JPG", "c.txt", "d.wgsl"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("e.png")).unwrap();

        let files = list_files(dir.path(), &["png", "jpg"]);
        let names: Vec<String> = files.iter().map(|p| stem(p)).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_files(&dir.path().join("nope"), &["png"]).is_empty());
    }

    #[test]
    fn missing_base_shader_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AssetPaths::new(dir.path());
        let err = load_scene_assets(&paths, &BoxesConfig::default()).unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
    }
}
