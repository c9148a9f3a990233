//! Asset directory resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Well-known locations inside an asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn shaders(&self) -> PathBuf {
        self.root.join("shaders")
    }

    pub fn textures(&self) -> PathBuf {
        self.root.join("textures")
    }

    /// Cubemap faces live at the root: `cubemap_posx.jpg` and so on.
    pub fn cubemaps(&self) -> PathBuf {
        self.root.clone()
    }
}

/// Find the asset directory.
///
/// Absolute paths are used as-is. Relative paths are tried next to the
/// executable, then in the working directory, then in the user data
/// directory. When none exists the working-directory candidate is returned
/// so later errors name a sensible path.
pub fn resolve_asset_dir(configured: &str) -> PathBuf {
    let configured = Path::new(configured);
    if configured.is_absolute() {
        return configured.to_path_buf();
    }

    let mut candidates = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(configured));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(configured));
    }
    if let Some(data) = dirs::data_dir() {
        candidates.push(data.join("boxes").join(configured));
    }

    for candidate in &candidates {
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "resolved asset directory");
            return candidate.clone();
        }
    }

    configured.to_path_buf()
}
