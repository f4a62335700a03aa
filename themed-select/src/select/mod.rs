//! Select widget - a themed dropdown over a consumer-owned selection.

pub mod config;
pub mod events;
pub mod item;
pub mod list;
pub mod render;
mod state;
mod widget;

pub use config::{ItemStyleOverride, SelectConfig, TestIds};
pub use events::SelectEvent;
pub use item::{Item, SelectItem};
pub use list::{Row, RowVariant};
pub use state::{ListState, SelectionState, Transition};
pub use widget::{OnSelect, Select, SelectBuilder, SelectId};
