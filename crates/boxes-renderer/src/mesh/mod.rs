//! Rounded box mesh: the one piece of geometry every object in the scene uses.

mod rounded_box;
mod types;

pub use rounded_box::*;
pub use types::*;
