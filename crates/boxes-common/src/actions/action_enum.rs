use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Every notification the renderer accepts from its host.
///
/// Indices are signed on purpose: a selector receiving a negative or
/// out-of-range index rejects it instead of clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    // -- Selection --
    SetShader(i32),
    SetTexture(i32),
    CycleShader,
    CycleTexture,

    // -- Reflections --
    ToggleReflections(bool),

    // -- Material parameters --
    SetColorParameter { name: String, color: Color },
    SetFloatParameter { name: String, value: f32 },
}
