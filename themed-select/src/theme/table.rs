//! The built-in theme presets.

use std::sync::LazyLock;

use uidom::{Border, Color, Shadow};

use super::{ComponentId, StyleProperty, StyleValue, ThemeName};
use crate::colors;

static THEME_TABLE: LazyLock<ThemeTable> = LazyLock::new(ThemeTable::build);

pub(super) fn table() -> &'static ThemeTable {
    &THEME_TABLE
}

struct RootBoxTheme {
    background_color: Color,
    box_shadow: Option<Shadow>,
    border: Option<Border>,
}

struct TextTheme {
    font_color: Color,
}

struct ThemePreset {
    rootbox: RootBoxTheme,
    text: TextTheme,
}

impl ThemePreset {
    fn plain(background_color: Color) -> Self {
        Self {
            rootbox: RootBoxTheme {
                background_color,
                box_shadow: None,
                border: None,
            },
            text: TextTheme {
                font_color: colors::DARK,
            },
        }
    }

    fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.rootbox.box_shadow = Some(shadow);
        self
    }

    fn with_border(mut self, border: Border) -> Self {
        self.rootbox.border = Some(border);
        self
    }
}

pub(super) struct ThemeTable {
    blank: ThemePreset,
    none: ThemePreset,
    boxed: ThemePreset,
    underbar: ThemePreset,
}

impl ThemeTable {
    fn build() -> Self {
        let raised = Shadow::new(colors::DODGER_BLUE)
            .offset(3, 3)
            .opacity(0.5)
            .radius(5)
            .elevation(1);

        Self {
            blank: ThemePreset::plain(Color::Transparent),
            none: ThemePreset::plain(colors::WHITE).with_shadow(raised),
            boxed: ThemePreset::plain(colors::WHITE).with_border(Border::all(colors::GRAY59, 2)),
            underbar: ThemePreset::plain(colors::WHITE)
                .with_border(Border::bottom(colors::GRAY59, 2)),
        }
    }

    fn preset(&self, theme: ThemeName) -> &ThemePreset {
        match theme {
            ThemeName::Blank => &self.blank,
            ThemeName::None => &self.none,
            ThemeName::Box => &self.boxed,
            ThemeName::Underbar => &self.underbar,
        }
    }

    pub(super) fn lookup(
        &self,
        theme: ThemeName,
        component: ComponentId,
        property: StyleProperty,
    ) -> Option<StyleValue> {
        let preset = self.preset(theme);

        match (component, property) {
            (ComponentId::RootBox, StyleProperty::BackgroundColor) => {
                Some(StyleValue::Color(preset.rootbox.background_color))
            }
            (ComponentId::RootBox, StyleProperty::BoxShadow) => {
                preset.rootbox.box_shadow.map(StyleValue::Shadow)
            }
            (ComponentId::RootBox, StyleProperty::Border) => {
                preset.rootbox.border.map(StyleValue::Border)
            }
            (ComponentId::Text, StyleProperty::FontColor) => {
                Some(StyleValue::Color(preset.text.font_color))
            }
            _ => None,
        }
    }
}
