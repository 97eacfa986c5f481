use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Border, Direction, Edges, Overflow, Radius, Size, Style, TextStyle};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub max_height: Option<u16>,
    pub padding: Edges,
    pub margin: Edges,

    // Flex container
    pub direction: Direction,
    pub gap: u16,

    // Overflow
    pub overflow_y: Overflow,
    pub scroll_offset: u16,

    // Visual
    pub style: Style,

    // Interaction
    pub clickable: bool,
    /// Disabled elements don't receive input.
    pub disabled: bool,

    // Custom data storage (item indices, marker values, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self::with_id(generate_id("el"))
    }
}

impl Element {
    fn with_id(id: String) -> Self {
        Self {
            id,
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            max_height: None,
            padding: Edges::default(),
            margin: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            overflow_y: Overflow::Visible,
            scroll_offset: 0,
            style: Style::default(),
            clickable: false,
            disabled: false,
            data: HashMap::new(),
        }
    }

    pub fn box_() -> Self {
        Self::with_id(generate_id("box"))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::with_id(generate_id("text"))
        }
    }

    pub fn col() -> Self {
        Self {
            direction: Direction::Column,
            ..Self::with_id(generate_id("col"))
        }
    }

    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Self::with_id(generate_id("row"))
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
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

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }

    pub fn scroll_offset(mut self, offset: u16) -> Self {
        self.scroll_offset = offset;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.style.border = border;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.style.radius = radius;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.style.text_style = text_style;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text and empty boxes.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Text content, if this is a text element.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Space taken by border and padding on each axis.
    pub(crate) fn chrome(&self) -> (u16, u16) {
        let border = self.style.border.thickness() * 2;
        (
            border + self.padding.horizontal_total(),
            border + self.padding.vertical_total(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_number(element: &Element) -> u64 {
        element
            .id
            .rsplit('-')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap()
    }

    #[test]
    fn test_constructors_take_one_id_each() {
        let first = Element::box_();
        let text = Element::text("a");
        let col = Element::col();
        let row = Element::row();
        let plain = Element::default();

        let base = id_number(&first);
        assert_eq!(id_number(&text), base + 1);
        assert_eq!(id_number(&col), base + 2);
        assert_eq!(id_number(&row), base + 3);
        assert_eq!(id_number(&plain), base + 4);
        assert!(text.id.starts_with("text-"));
    }
}
