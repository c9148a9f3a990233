//! Orbit controllers: drag-to-spin rotation with inertia.
//!
//! A controller turns pointer samples into a rotation quaternion and keeps
//! spinning at the last measured angular velocity after release.

mod controller;

pub use boxes_config::OrbitMode;
pub use controller::*;

#[cfg(test)]
mod tests;
