//! Winit key name normalization and the key bindings of the viewer.
//!
//! Arrow keys nudge the central box; a few letters drive the same
//! notifications the on-screen controls would send.

use boxes_common::{Action, NudgeDirection};

/// What a key press does.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyBinding {
    /// Nudge the central orbit.
    Nudge(NudgeDirection),
    /// Send a notification to the renderer.
    Action(Action),
    /// Toggle live reflections; the host knows the current state.
    ToggleReflections,
    /// Close the window.
    Quit,
}

/// Convert a winit key name to the normalized form used by [`key_binding`].
///
/// Winit uses names like `"ArrowUp"` and `" "` for space.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        " " => "Space".to_string(),
        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                key.to_string()
            }
        }
    }
}

/// Look up the binding for a normalized key name.
pub fn key_binding(key: &str) -> Option<KeyBinding> {
    let binding = match key {
        "Up" => KeyBinding::Nudge(NudgeDirection::Up),
        "Down" => KeyBinding::Nudge(NudgeDirection::Down),
        "Left" => KeyBinding::Nudge(NudgeDirection::Left),
        "Right" => KeyBinding::Nudge(NudgeDirection::Right),
        "S" => KeyBinding::Action(Action::CycleShader),
        "T" => KeyBinding::Action(Action::CycleTexture),
        "R" => KeyBinding::ToggleReflections,
        "Escape" => KeyBinding::Quit,
        _ => {
            let digit = key.parse::<i32>().ok().filter(|d| (1..=9).contains(d))?;
            KeyBinding::Action(Action::SetShader(digit - 1))
        }
    };
    Some(binding)
}
