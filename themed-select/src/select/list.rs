//! Row layout for the dropdown list.

use uidom::{Edges, Element, Justify, Size, Style};

use super::config::ItemStyleOverride;
use super::events::SelectEvent;
use super::item::Item;
use crate::colors;

pub const ROW_HEIGHT: u16 = 32;
const ROW_PADDING: u16 = 6;
const ROW_FONT_SIZE: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVariant {
    Default,
    Selected,
}

/// One list row before it is turned into elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    pub item: &'a Item,
    pub variant: RowVariant,
    pub style_override: Option<&'a Style>,
}

pub fn row_variant(item: &Item, selected: Option<&Item>) -> RowVariant {
    match selected {
        Some(selected) if selected.same_value(item) => RowVariant::Selected,
        _ => RowVariant::Default,
    }
}

pub fn row_override(
    variant: RowVariant,
    overrides: Option<&ItemStyleOverride>,
) -> Option<&Style> {
    let overrides = overrides?;
    match variant {
        RowVariant::Selected => overrides.selected_item.as_ref(),
        RowVariant::Default => overrides.default_item.as_ref(),
    }
}

/// Rows for `items`, in the given order.
///
/// Items are neither sorted nor deduplicated. Every item sharing the selected
/// value renders as selected.
pub fn rows<'a>(
    items: &'a [Item],
    selected: Option<&Item>,
    overrides: Option<&'a ItemStyleOverride>,
) -> Vec<Row<'a>> {
    items
        .iter()
        .map(|item| {
            let variant = row_variant(item, selected);
            Row {
                item,
                variant,
                style_override: row_override(variant, overrides),
            }
        })
        .collect()
}

impl Row<'_> {
    fn base_style(&self) -> Style {
        let background = match self.variant {
            RowVariant::Selected => colors::LIGHT_BLUE,
            RowVariant::Default => colors::WHITE,
        };
        Style::new().background(background)
    }

    fn text_style(&self) -> Style {
        Style::new()
            .foreground(colors::BLACK)
            .font_size(ROW_FONT_SIZE)
    }

    /// Pressable row keyed by the item's value.
    pub fn render(&self) -> Element {
        let (row_style, text_style) = match self.style_override {
            Some(over) => (self.base_style().merge(over), self.text_style().merge(over)),
            None => (self.base_style(), self.text_style()),
        };

        let row = Element::pressable()
            .key(self.item.value.clone())
            .width(Size::Fill)
            .height(Size::Fixed(ROW_HEIGHT))
            .padding(Edges::all(ROW_PADDING))
            .justify(Justify::Center)
            .active_opacity(1.0)
            .style(row_style)
            .data("variant", self.variant_tag())
            .child(Element::text(self.item.text.clone()).style(text_style));

        SelectEvent::Pick(self.item.value.clone()).attach(row)
    }

    fn variant_tag(&self) -> &'static str {
        match self.variant {
            RowVariant::Selected => "selected",
            RowVariant::Default => "default",
        }
    }
}
