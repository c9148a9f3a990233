//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the renderer and the action queue.

mod core;
mod event_handler;
mod init;
mod polling;
mod render;
mod shutdown;

pub use core::BoxesApp;
