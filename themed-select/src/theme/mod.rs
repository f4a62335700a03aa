//! Theme presets for the select widget.
//!
//! A preset is picked by [`ThemeName`] and queried one attribute at a time
//! with [`resolve`]. The underlying table is built once and never handed out,
//! so no caller can change what another widget sees.
//!
//! # Example
//!
//! ```
//! use themed_select::theme::{resolve, ComponentId, StyleProperty, StyleValue, ThemeName};
//!
//! let bg = resolve(ThemeName::Box, ComponentId::RootBox, StyleProperty::BackgroundColor);
//! assert!(matches!(bg, Some(StyleValue::Color(_))));
//!
//! // `item` has no theme entries
//! assert_eq!(resolve(ThemeName::Box, ComponentId::Item, StyleProperty::Border), None);
//! ```

mod table;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use uidom::{Border, Color, Shadow, Style};

use crate::error::SelectError;

/// Visual preset for the root control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ThemeName {
    /// Transparent background, no border or shadow.
    Blank,
    /// White background with a soft drop shadow.
    #[default]
    None,
    /// White background with a full border.
    Box,
    /// White background with a bottom border only.
    Underbar,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [Self::Blank, Self::None, Self::Box, Self::Underbar];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::None => "none",
            Self::Box => "box",
            Self::Underbar => "underbar",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| SelectError::UnknownTheme(s.to_string()))
    }
}

impl TryFrom<String> for ThemeName {
    type Error = SelectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Sub-element of the widget a theme attribute applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    RootBox,
    Text,
    Item,
}

impl ComponentId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RootBox => "rootbox",
            Self::Text => "text",
            Self::Item => "item",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    BackgroundColor,
    FontColor,
    BoxShadow,
    Border,
}

impl StyleProperty {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BackgroundColor => "backgroundColor",
            Self::FontColor => "fontColor",
            Self::BoxShadow => "boxShadow",
            Self::Border => "border",
        }
    }
}

/// A concrete value stored in the theme table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Shadow(Shadow),
    Border(Border),
}

impl StyleValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_shadow(&self) -> Option<Shadow> {
        match self {
            Self::Shadow(shadow) => Some(*shadow),
            _ => None,
        }
    }

    pub fn as_border(&self) -> Option<Border> {
        match self {
            Self::Border(border) => Some(*border),
            _ => None,
        }
    }
}

/// Look up one attribute of a theme preset.
///
/// Returns `None` when the preset does not define the attribute for that
/// component. Callers treat an absent value as "contributes nothing".
pub fn resolve(
    theme: ThemeName,
    component: ComponentId,
    property: StyleProperty,
) -> Option<StyleValue> {
    let value = table::table().lookup(theme, component, property);
    log::trace!(
        "resolve {}.{}.{} -> {:?}",
        theme,
        component.as_str(),
        property.as_str(),
        value
    );
    value
}

/// Theme actually used for an element that may carry an explicit override.
///
/// A non-empty override forces [`ThemeName::Blank`] so theme decoration never
/// fights with the caller's own style. An empty override counts as absent.
pub fn effective_theme(requested: ThemeName, style_override: Option<&Style>) -> ThemeName {
    match style_override {
        Some(style) if !style.is_empty() => ThemeName::Blank,
        _ => requested,
    }
}

/// Root container style derived purely from the theme.
pub fn container_style(theme: ThemeName) -> Style {
    let background = resolve(theme, ComponentId::RootBox, StyleProperty::BackgroundColor)
        .and_then(|v| v.as_color());
    let shadow =
        resolve(theme, ComponentId::RootBox, StyleProperty::BoxShadow).and_then(|v| v.as_shadow());
    let border =
        resolve(theme, ComponentId::RootBox, StyleProperty::Border).and_then(|v| v.as_border());

    Style {
        background,
        shadow,
        border,
        ..Style::new()
    }
}

/// Root label style derived purely from the theme.
pub fn label_style(theme: ThemeName) -> Style {
    Style {
        foreground: resolve(theme, ComponentId::Text, StyleProperty::FontColor)
            .and_then(|v| v.as_color()),
        ..Style::new()
    }
}
