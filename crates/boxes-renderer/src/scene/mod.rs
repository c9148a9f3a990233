//! The scene: a ring of boxes around a central box inside a sky box.
//!
//! [`SceneState`] is what input changes, [`ScenePose`] is that state frozen
//! for one frame, and [`SceneRenderer`] turns a pose into GPU passes.

mod assets;
mod camera;
mod compose;
mod layout;
mod matrices;
mod plan;
mod renderer;
mod resources;
mod state;

pub use assets::*;
pub use camera::*;
pub use compose::*;
pub use layout::*;
pub use matrices::*;
pub use plan::*;
pub use renderer::*;
pub use resources::*;
pub use state::*;
