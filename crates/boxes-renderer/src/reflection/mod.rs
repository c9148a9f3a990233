//! Dynamic reflections: each reflective object sees the rest of the scene
//! through a cube map rendered from its own position.
//!
//! [`ReflectionPipeline`] only decides which faces to render and with which
//! view; the scene renderer encodes the passes.

mod faces;
mod schedule;
mod target;

pub use faces::*;
pub use schedule::*;
pub use target::*;
