//! Element tree for the Select widget.
//!
//! ```text
//! container
//! ├── pressable               (test_id, toggles the list)
//! │   └── row                 ({test_id}-root-select, themed)
//! │       ├── text            ({test_id}-root-text)
//! │       └── image           ({test_id}-root-arrow)
//! └── overlay                 (only while open, close request = dismiss)
//!     └── container           (anchored to the root)
//!         ├── pressable       (strip over the root, toggles the list)
//!         └── list            ({test_id}-list)
//! ```

use uidom::{
    Align, Edges, Element, ImageSource, Justify, Position, Rect, Shadow, Size, Style,
};

use super::events::SelectEvent;
use super::list;
use super::widget::Select;
use crate::colors;
use crate::theme::{self, ThemeName};

pub const ARROW_DOWN: ImageSource = ImageSource::asset("ic_arr_down");
pub const ARROW_UP: ImageSource = ImageSource::asset("ic_arr_up");

pub const ROOT_WIDTH: u16 = 128;
pub const ROOT_HEIGHT: u16 = 48;
const ROOT_PADDING: Edges = Edges::symmetric(14, 6);
const LABEL_FONT_SIZE: u16 = 14;
const LIST_PADDING_TOP: u16 = 8;

impl Select {
    /// Theme used for the root container after override precedence.
    pub fn container_theme(&self) -> ThemeName {
        theme::effective_theme(
            self.config().theme,
            self.config().root_container_style_override.as_ref(),
        )
    }

    /// Theme used for the root label after override precedence.
    pub fn label_theme(&self) -> ThemeName {
        theme::effective_theme(
            self.config().theme,
            self.config().root_label_style_override.as_ref(),
        )
    }

    pub fn container_style(&self) -> Style {
        let base = theme::container_style(self.container_theme());
        match &self.config().root_container_style_override {
            Some(over) => base.merge(over),
            None => base,
        }
    }

    pub fn label_style(&self) -> Style {
        let base = theme::label_style(self.label_theme()).font_size(LABEL_FONT_SIZE);
        match &self.config().root_label_style_override {
            Some(over) => base.merge(over),
            None => base,
        }
    }

    pub fn arrow(&self) -> ImageSource {
        if self.is_list_open() { ARROW_UP } else { ARROW_DOWN }
    }

    /// Build the element tree for the current state.
    pub fn render(&self) -> Element {
        let root = Element::container()
            .id(self.id_string())
            .z_index(1)
            .child(self.render_trigger());

        if self.is_list_open() {
            root.child(self.render_overlay())
        } else {
            root
        }
    }

    fn render_trigger(&self) -> Element {
        let ids = self.test_ids();

        let summary = Element::row()
            .test_id(ids.root_select)
            .width(Size::Fixed(ROOT_WIDTH))
            .height(Size::Fixed(ROOT_HEIGHT))
            .padding(ROOT_PADDING)
            .justify(Justify::SpaceBetween)
            .align(Align::Center)
            .style(self.container_style())
            .child(
                Element::text(self.label())
                    .test_id(ids.root_text)
                    .style(self.label_style()),
            )
            .child(Element::image(self.arrow()).test_id(ids.root_arrow));

        let trigger = Element::pressable()
            .test_id(ids.root)
            .active_opacity(self.config().activation_opacity)
            .disabled(self.is_disabled())
            .child(summary);

        SelectEvent::Activate.attach(trigger)
    }

    fn render_overlay(&self) -> Element {
        let anchor = self.layout();
        let strip_height = anchor.map_or(ROOT_HEIGHT, |frame| frame.height);

        let strip = SelectEvent::Activate.attach(
            Element::pressable()
                .width(Size::Fill)
                .height(Size::Fixed(strip_height)),
        );

        let overrides = self.config().item_style_override.as_ref();
        let rows = list::rows(self.items(), self.selected_item(), overrides);
        let list = rows.iter().fold(
            Element::list()
                .test_id(self.test_ids().list)
                .width(Size::Fill)
                .padding(Edges::top(LIST_PADDING_TOP))
                .style(Style::new().background(colors::WHITE)),
            |list, row| list.child(row.render()),
        );

        let panel_style = Style::new().shadow(
            Shadow::new(colors::DODGER_BLUE)
                .offset(0, 5)
                .opacity(0.2)
                .elevation(8),
        );
        let panel_style = match overrides.and_then(|o| o.list.as_ref()) {
            Some(over) => panel_style.merge(over),
            None => panel_style,
        };

        let panel = anchor_panel(Element::container().style(panel_style), anchor)
            .child(strip)
            .child(list);

        SelectEvent::Dismiss.attach(Element::overlay().transparent(true).child(panel))
    }
}

/// Place the list panel over the measured root frame, or just below the
/// root when no measurement has arrived yet.
fn anchor_panel(panel: Element, anchor: Option<Rect>) -> Element {
    match anchor {
        Some(frame) => panel
            .position(Position::Absolute)
            .top(frame.y)
            .left(frame.x)
            .width(Size::Fixed(frame.width)),
        None => panel
            .position(Position::Relative)
            .top(0)
            .left(0)
            .width(Size::Fixed(ROOT_WIDTH)),
    }
}
