use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, ImageSource};
use crate::types::{Align, Direction, Edges, Justify, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Which host primitive an element maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Container,
    /// Touch target with press feedback.
    Pressable,
    Text,
    Image,
    /// Scrollable, keyed list of rows.
    List,
    /// Modal surface drawn above all other content.
    Overlay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: Kind,
    /// Identifier exposed to UI automation.
    pub test_id: Option<String>,
    /// Stable key among siblings of a list.
    pub key: Option<String>,

    pub content: Content,

    // Layout
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub direction: Direction,
    pub justify: Justify,
    pub align: Align,

    // Positioning
    pub position: Position,
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub z_index: i16,

    // Visual
    pub style: Style,

    // Interaction
    /// Opacity applied while a pressable is held down.
    pub active_opacity: Option<f32>,
    pub disabled: bool,
    /// Overlays only: whether the content behind stays visible.
    pub transparent: bool,

    // Custom data storage (for handler tags, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: Kind::Container,
            test_id: None,
            key: None,
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction: Direction::Column,
            justify: Justify::Start,
            align: Align::Start,
            position: Position::Static,
            top: None,
            left: None,
            z_index: 0,
            style: Style::default(),
            active_opacity: None,
            disabled: false,
            transparent: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn container() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn pressable() -> Self {
        Self {
            id: generate_id("press"),
            kind: Kind::Pressable,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            kind: Kind::Text,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn image(source: ImageSource) -> Self {
        Self {
            id: generate_id("image"),
            kind: Kind::Image,
            content: Content::Image(source),
            ..Default::default()
        }
    }

    pub fn list() -> Self {
        Self {
            id: generate_id("list"),
            kind: Kind::List,
            ..Default::default()
        }
    }

    pub fn overlay() -> Self {
        Self {
            id: generate_id("overlay"),
            kind: Kind::Overlay,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn test_id(mut self, test_id: Option<String>) -> Self {
        self.test_id = test_id;
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn active_opacity(mut self, opacity: f32) -> Self {
        self.active_opacity = Some(opacity);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn image_source(&self) -> Option<ImageSource> {
        match &self.content {
            Content::Image(source) => Some(*source),
            _ => None,
        }
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}
