//! Configuration for a select instance.

use serde::Deserialize;
use uidom::Style;

use super::item::Item;
use crate::error::{Result, SelectError};
use crate::theme::ThemeName;

pub const ROOT_SELECT_SUFFIX: &str = "-root-select";
pub const ROOT_TEXT_SUFFIX: &str = "-root-text";
pub const ROOT_ARROW_SUFFIX: &str = "-root-arrow";
pub const LIST_SUFFIX: &str = "-list";

pub const DEFAULT_ACTIVATION_OPACITY: f32 = 0.5;

/// Per-instance styles for the dropdown list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemStyleOverride {
    /// Overlay container around the list.
    pub list: Option<Style>,
    /// Rows that are not the current selection.
    pub default_item: Option<Style>,
    /// The row matching the current selection.
    pub selected_item: Option<Style>,
}

/// Everything a select needs apart from its `on_select` callback.
///
/// Deserializes from camelCase keys. The prop names of the mobile component
/// this widget mirrors (`testID`, `rootViewStyle`, `placeholder`, ...) are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    #[serde(alias = "testID")]
    pub test_id: Option<String>,
    pub theme: ThemeName,
    #[serde(alias = "rootViewStyle")]
    pub root_container_style_override: Option<Style>,
    #[serde(alias = "rootTextStyle")]
    pub root_label_style_override: Option<Style>,
    #[serde(alias = "placeholder")]
    pub placeholder_text: String,
    #[serde(alias = "activeOpacity")]
    pub activation_opacity: f32,
    pub disabled: bool,
    pub items: Vec<Item>,
    #[serde(alias = "itemStyle")]
    pub item_style_override: Option<ItemStyleOverride>,
    pub selected_item: Option<Item>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            test_id: None,
            theme: ThemeName::None,
            root_container_style_override: None,
            root_label_style_override: None,
            placeholder_text: String::new(),
            activation_opacity: DEFAULT_ACTIVATION_OPACITY,
            disabled: false,
            items: Vec::new(),
            item_style_override: None,
            selected_item: None,
        }
    }
}

impl SelectConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.activation_opacity) {
            return Err(SelectError::InvalidActivationOpacity(
                self.activation_opacity,
            ));
        }
        Ok(())
    }

    pub fn test_ids(&self) -> TestIds {
        TestIds::derive(self.test_id.as_deref())
    }
}

/// Identifiers exposed to UI automation, all derived from one base id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestIds {
    pub root: Option<String>,
    pub root_select: Option<String>,
    pub root_text: Option<String>,
    pub root_arrow: Option<String>,
    pub list: Option<String>,
}

impl TestIds {
    pub fn derive(base: Option<&str>) -> Self {
        let Some(base) = base else {
            return Self::default();
        };

        Self {
            root: Some(base.to_string()),
            root_select: Some(format!("{base}{ROOT_SELECT_SUFFIX}")),
            root_text: Some(format!("{base}{ROOT_TEXT_SUFFIX}")),
            root_arrow: Some(format!("{base}{ROOT_ARROW_SUFFIX}")),
            list: Some(format!("{base}{LIST_SUFFIX}")),
        }
    }
}
