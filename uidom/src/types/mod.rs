mod border;
mod color;
mod edges;
mod enums;
mod shadow;
mod style;

pub use border::{Border, BorderSide};
pub use color::{Color, ParseColorError};
pub use edges::Edges;
pub use enums::{Align, Direction, Justify, Position, Size};
pub use shadow::Shadow;
pub use style::Style;
