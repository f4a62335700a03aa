pub use crate::error::{Result, SelectError};
pub use crate::select::{
    Item, ItemStyleOverride, Select, SelectConfig, SelectEvent, SelectItem, Transition,
};
pub use crate::theme::ThemeName;
pub use uidom::{Color, Element, Rect, Style};
