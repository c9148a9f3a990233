mod context;
mod types;
mod uniforms;

pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_shader_build_display() {
        let err = RendererError::ShaderBuild {
            name: "basic.wgsl".into(),
            log: "expected ';'".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to build shader basic.wgsl: expected ';'"
        );
    }

    #[test]
    fn renderer_error_capability_display() {
        let err = RendererError::MissingCapability("3D textures".into());
        assert_eq!(err.to_string(), "missing graphics capability: 3D textures");
    }

    #[test]
    fn physical_size_aspect() {
        let size = PhysicalSize {
            width: 800,
            height: 400,
        };
        assert_eq!(size.aspect(), 2.0);
    }
}
