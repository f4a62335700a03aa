pub mod element;
pub mod layout;
pub mod types;

pub use element::{Content, Element, ImageSource, Kind, find_by_test_id, find_element};
pub use layout::Rect;
pub use types::*;
