//! Initial values for named shader parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parameters applied to every program at startup.
///
/// Colors are `#rrggbb` or `#rrggbbaa` strings. Names that no program
/// declares are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    pub colors: BTreeMap<String, String>,
    pub floats: BTreeMap<String, f32>,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        let colors = [
            ("baseColor", "#b8a36e"),
            ("specularColor", "#ffffff"),
            ("tint", "#cfe8ff"),
        ];
        let floats = [
            ("reflectionFactor", 0.6),
            ("fresnelPower", 3.0),
            ("noiseScale", 1.0),
        ];
        Self {
            colors: colors
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            floats: floats.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }
}
