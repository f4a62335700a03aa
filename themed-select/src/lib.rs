//! A themed dropdown select.
//!
//! [`Select`] keeps the open/closed state of its item list and produces a
//! [`uidom::Element`] tree for the host renderer on every [`Select::render`].
//! Presses on that tree are routed back through [`Select::press`].

pub mod colors;
pub mod error;
pub mod prelude;
pub mod select;
pub mod theme;

pub use error::{Result, SelectError};
pub use select::{
    Item, ItemStyleOverride, ListState, Row, RowVariant, Select, SelectBuilder, SelectConfig,
    SelectEvent, SelectId, SelectItem, SelectionState, TestIds, Transition,
};
pub use theme::{ComponentId, StyleProperty, StyleValue, ThemeName, effective_theme, resolve};
