//! Fragment stages compiled into the binary.

/// Textured, lit surface used when no variant links.
pub const PASS_THROUGH_FRAGMENT: &str = include_str!("../shaders/pass_through.wgsl");

/// Samples the environment cube along the object-space direction; drawn on
/// the enlarged background box.
pub const ENVIRONMENT_FRAGMENT: &str = include_str!("../shaders/environment.wgsl");
