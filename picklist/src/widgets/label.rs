//! Label widget - a single line of text.

use picklist_dom::{Element, TextStyle};

#[derive(Clone, Debug, Default)]
pub struct Label {
    text: String,
    style: TextStyle,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::new(),
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn build(self) -> Element {
        Element::text(self.text).text_style(self.style)
    }
}
