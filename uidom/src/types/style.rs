use serde::Deserialize;

use super::{Border, Color, Shadow};

/// Visual attributes of an element. Every field is optional so a style can
/// act as a partial override on top of another one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    #[serde(alias = "backgroundColor")]
    pub background: Option<Color>,
    #[serde(alias = "color")]
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    pub font_size: Option<u16>,
    pub opacity: Option<f32>,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            background: None,
            foreground: None,
            border: None,
            shadow: None,
            font_size: None,
            opacity: None,
        }
    }

    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub const fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub const fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub const fn font_size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.foreground.is_none()
            && self.border.is_none()
            && self.shadow.is_none()
            && self.font_size.is_none()
            && self.opacity.is_none()
    }

    /// Layer `over` on top of `self`. Fields set in `over` win; borders are
    /// merged side by side.
    pub fn merge(self, over: &Style) -> Style {
        let border = match (self.border, over.border) {
            (Some(base), Some(top)) => Some(base.merge(top)),
            (base, top) => top.or(base),
        };

        Style {
            background: over.background.or(self.background),
            foreground: over.foreground.or(self.foreground),
            border,
            shadow: over.shadow.or(self.shadow),
            font_size: over.font_size.or(self.font_size),
            opacity: over.opacity.or(self.opacity),
        }
    }
}
