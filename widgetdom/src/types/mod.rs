mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, ColorSpace, Rgb};
pub use edges::Edges;
pub use enums::{Align, BorderStroke, Direction, Size, TextStyle};
pub use style::Style;
