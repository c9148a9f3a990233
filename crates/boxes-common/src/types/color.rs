use serde::{Deserialize, Serialize};

/// 8-bit RGBA color, the value carried by color parameter notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; the `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(3)? } else { 255 };
        Some(Self::from_rgba(channel(0)?, channel(1)?, channel(2)?, a))
    }

    /// Channels normalized to 0.0..=1.0, in the layout a `vec4<f32>` uniform expects.
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| c as f32 / 255.0)
    }
}
