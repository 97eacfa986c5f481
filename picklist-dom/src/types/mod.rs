mod edges;
mod enums;
mod style;

pub use edges::Edges;
pub use enums::{Border, Direction, Overflow, Radius, Size, TextStyle};
pub use style::Style;
