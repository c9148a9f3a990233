use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Per-resource asset failures. These are recoverable: the loader logs them
/// and moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("asset directory not found: {0}")]
    DirectoryNotFound(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum BoxesError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("scene.ring_radius = -1".into());
        assert_eq!(
            err.to_string(),
            "config validation error: scene.ring_radius = -1"
        );
    }

    #[test]
    fn asset_error_display() {
        let err = AssetError::Decode {
            path: PathBuf::from("textures/wood.png"),
            reason: "bad crc".into(),
        };
        assert_eq!(err.to_string(), "failed to decode textures/wood.png: bad crc");

        let err = AssetError::DirectoryNotFound(PathBuf::from("assets"));
        assert_eq!(err.to_string(), "asset directory not found: assets");
    }

    #[test]
    fn boxes_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: BoxesError = config_err.into();
        assert!(matches!(err, BoxesError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn boxes_error_from_asset() {
        let asset_err = AssetError::Read {
            path: PathBuf::from("basic.wgsl"),
            reason: "permission denied".into(),
        };
        let err: BoxesError = asset_err.into();
        assert!(matches!(err, BoxesError::Asset(_)));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn boxes_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BoxesError = io_err.into();
        assert!(matches!(err, BoxesError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn boxes_error_other_variants() {
        let err = BoxesError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = BoxesError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
