use std::path::Path;

use boxes_common::AssetError;
use boxes_renderer::ShaderSource;

use super::{list_files, stem};

/// Read the shared vertex stage. Without it nothing can be drawn.
pub fn load_base_shader(dir: &Path, file_name: &str) -> Result<ShaderSource, AssetError> {
    let path = dir.join(file_name);
    let source = std::fs::read_to_string(&path).map_err(|e| AssetError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(ShaderSource {
        name: stem(&path),
        source,
    })
}

/// Every other `*.wgsl` in `dir`, sorted by name.
pub fn load_variants(dir: &Path, base_file_name: &str) -> Vec<ShaderSource> {
    list_files(dir, &["wgsl"])
        .into_iter()
        .filter(|path| path.file_name().is_some_and(|n| n != base_file_name))
        .filter_map(|path| match std::fs::read_to_string(&path) {
            Ok(source) => Some(ShaderSource {
                name: stem(&path),
                source,
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping unreadable shader: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_exclude_the_base_stage() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("basic.wgsl"), "// base").unwrap();
        std::fs::write(dir.path().join("wood.wgsl"), "// wood").unwrap();
        std::fs::write(dir.path().join("glass.wgsl"), "// glass").unwrap();

        let base = load_base_shader(dir.path(), "basic.wgsl").unwrap();
        assert_eq!(base.name, "basic");
        assert_eq!(base.source, "// base");

        let names: Vec<String> = load_variants(dir.path(), "basic.wgsl")
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["glass", "wood"]);
    }

    #[test]
    fn missing_base_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_base_shader(dir.path(), "basic.wgsl").unwrap_err();
        assert!(err.to_string().contains("basic.wgsl"));
    }
}
