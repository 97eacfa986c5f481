//! Bordered widget - a box drawn around a single child.

use picklist_dom::{Border, Element, Radius};

/// A bordered container builder taking `{border, radius, child}`.
///
/// Spacing and size hints are left to the caller, which sets them on the
/// built element.
#[derive(Clone, Debug)]
pub struct Bordered {
    border: Border,
    radius: Radius,
    child: Element,
}

impl Bordered {
    pub fn new(child: Element) -> Self {
        Self {
            border: Border::Single,
            radius: Radius::Square,
            child,
        }
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn build(self) -> Element {
        Element::box_()
            .border(self.border)
            .radius(self.radius)
            .child(self.child)
    }
}
