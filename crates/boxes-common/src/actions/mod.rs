//! Parameter-change notifications flowing from the host into the renderer.
//!
//! The host (keyboard shortcuts, config, a future control panel) pushes
//! [`Action`]s onto an [`ActionQueue`]; the renderer drains the queue once
//! per tick before drawing.

mod action_enum;
mod dispatch;
mod queue;

pub use action_enum::*;
pub use queue::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn all_actions_have_labels() {
        let actions = vec![
            Action::SetShader(0),
            Action::SetTexture(2),
            Action::ToggleReflections(true),
            Action::SetColorParameter {
                name: "basicColor".into(),
                color: Color::from_rgba(255, 0, 0, 255),
            },
            Action::SetFloatParameter {
                name: "reflectionFactor".into(),
                value: 0.5,
            },
            Action::CycleShader,
            Action::CycleTexture,
        ];
        for action in &actions {
            assert!(!action.label().is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::SetShader(-1),
            Action::ToggleReflections(false),
            Action::SetColorParameter {
                name: "fresnelColor".into(),
                color: Color::from_rgba(10, 20, 30, 255),
            },
            Action::SetFloatParameter {
                name: "fresnelPower".into(),
                value: 2.5,
            },
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, back);
        }
    }

    #[test]
    fn only_parameter_actions_target_uniforms() {
        assert!(Action::SetFloatParameter {
            name: "x".into(),
            value: 1.0
        }
        .is_parameter());
        assert!(!Action::SetShader(0).is_parameter());
        assert!(!Action::ToggleReflections(true).is_parameter());
    }
}
