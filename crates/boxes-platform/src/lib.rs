//! Platform glue: window coordinates, wheel and key names, asset lookup.
//!
//! Nothing here depends on the windowing crate; the host hands over plain
//! numbers and key name strings.

pub mod keys;
pub mod mouse;
pub mod paths;

pub use keys::{key_binding, normalize_winit_key, KeyBinding};
pub use mouse::{pixel_to_view, wheel_lines_to_delta, wheel_pixels_to_delta, WHEEL_NOTCH};
pub use paths::{resolve_asset_dir, AssetPaths};
