pub mod buffer;
pub mod element;
pub mod layout;
pub mod render;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{collect_clickable, find_element, find_element_by_data, Content, Element};
pub use layout::{layout, LayoutResult, Rect};
pub use render::{render_lines, render_to_buffer};
pub use types::*;
