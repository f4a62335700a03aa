use serde::Deserialize;

use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BorderSide {
    pub color: Color,
    pub width: u16,
}

impl BorderSide {
    pub const fn new(color: Color, width: u16) -> Self {
        Self { color, width }
    }
}

/// Per-side border. A side left as `None` draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Border {
    pub top: Option<BorderSide>,
    pub right: Option<BorderSide>,
    pub bottom: Option<BorderSide>,
    pub left: Option<BorderSide>,
}

impl Border {
    pub const fn none() -> Self {
        Self {
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }

    pub const fn all(color: Color, width: u16) -> Self {
        let side = Some(BorderSide::new(color, width));
        Self {
            top: side,
            right: side,
            bottom: side,
            left: side,
        }
    }

    pub const fn bottom(color: Color, width: u16) -> Self {
        Self {
            bottom: Some(BorderSide::new(color, width)),
            ..Self::none()
        }
    }

    pub const fn is_none(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Overlay `other` on top of `self`; sides set in `other` win.
    pub fn merge(self, other: Border) -> Border {
        Border {
            top: other.top.or(self.top),
            right: other.right.or(self.right),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
        }
    }
}
