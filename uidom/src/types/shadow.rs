use serde::Deserialize;

use super::Color;

/// Drop shadow under a container.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Color,
    #[serde(default)]
    pub offset: (i16, i16),
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub radius: u16,
    /// Platform elevation hint, for renderers that stack by elevation.
    #[serde(default)]
    pub elevation: u16,
}

fn default_opacity() -> f32 {
    1.0
}

impl Shadow {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            offset: (0, 0),
            opacity: 1.0,
            radius: 0,
            elevation: 0,
        }
    }

    pub const fn offset(mut self, x: i16, y: i16) -> Self {
        self.offset = (x, y);
        self
    }

    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn radius(mut self, radius: u16) -> Self {
        self.radius = radius;
        self
    }

    pub const fn elevation(mut self, elevation: u16) -> Self {
        self.elevation = elevation;
        self
    }
}
