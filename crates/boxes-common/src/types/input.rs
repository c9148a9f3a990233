use serde::{Deserialize, Serialize};

/// A pointer position already mapped to view space: x and y in [-1, 1],
/// y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewPos {
    pub x: f32,
    pub y: f32,
}

impl ViewPos {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pressed-button mask carried by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl PointerButtons {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        middle: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
        middle: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
        middle: false,
    };
    pub const MIDDLE: Self = Self {
        left: false,
        right: false,
        middle: true,
    };

    pub fn union(self, other: Self) -> Self {
        Self {
            left: self.left || other.left,
            right: self.right || other.right,
            middle: self.middle || other.middle,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.middle
    }
}

/// Directional key codes understood by the keyboard orbit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NudgeDirection {
    /// Unit step in view space.
    pub fn unit(self) -> (f32, f32) {
        match self {
            NudgeDirection::Up => (0.0, 1.0),
            NudgeDirection::Down => (0.0, -1.0),
            NudgeDirection::Left => (-1.0, 0.0),
            NudgeDirection::Right => (1.0, 0.0),
        }
    }
}
