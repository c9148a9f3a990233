use super::Action;

impl Action {
    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SetShader(_) => "Set Shader",
            Action::SetTexture(_) => "Set Texture",
            Action::CycleShader => "Next Shader",
            Action::CycleTexture => "Next Texture",
            Action::ToggleReflections(true) => "Enable Reflections",
            Action::ToggleReflections(false) => "Disable Reflections",
            Action::SetColorParameter { .. } => "Set Color Parameter",
            Action::SetFloatParameter { .. } => "Set Float Parameter",
        }
    }

    /// Whether this action writes a named uniform in every program.
    pub fn is_parameter(&self) -> bool {
        matches!(
            self,
            Action::SetColorParameter { .. } | Action::SetFloatParameter { .. }
        )
    }
}
