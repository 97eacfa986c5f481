//! Box layout: columns stack their children, rows flow them left to right.
//!
//! Sizes come from [`measure`] (content size plus border and padding) and
//! are then resolved against the slot the parent offers. Children of a
//! scrolled column that fall above the viewport, or start below the bottom
//! of a clipping ancestor, are not laid out at all.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Overflow, Size};

#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::default();
    place(root, available, available, &mut result);
    log::trace!("layout: {} elements placed", result.len());
    result
}

/// Natural size of an element's border box (margin excluded).
pub fn measure(element: &Element) -> (u16, u16) {
    let (chrome_w, chrome_h) = element.chrome();

    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text).min(u16::MAX as usize) as u16, 1),
        Content::Children(children) => measure_children(element, children),
    };

    let mut width = content_w.saturating_add(chrome_w);
    let mut height = content_h.saturating_add(chrome_h);

    if let Size::Fixed(n) = element.width {
        width = n;
    }
    if let Size::Fixed(n) = element.height {
        height = n;
    }
    if let Some(max) = element.max_height {
        height = height.min(max);
    }

    (width, height)
}

fn measure_outer(element: &Element) -> (u16, u16) {
    let (w, h) = measure(element);
    (
        w.saturating_add(element.margin.horizontal_total()),
        h.saturating_add(element.margin.vertical_total()),
    )
}

fn measure_children(element: &Element, children: &[Element]) -> (u16, u16) {
    let gaps = element
        .gap
        .saturating_mul(children.len().saturating_sub(1) as u16);
    let sizes = children.iter().map(measure_outer);

    match element.direction {
        Direction::Column => {
            let (w, h) = sizes.fold((0u16, 0u16), |(w, h), (cw, ch)| {
                (w.max(cw), h.saturating_add(ch))
            });
            (w, h.saturating_add(gaps))
        }
        Direction::Row => {
            let (w, h) = sizes.fold((0u16, 0u16), |(w, h), (cw, ch)| {
                (w.saturating_add(cw), h.max(ch))
            });
            (w.saturating_add(gaps), h)
        }
    }
}

/// `clip` is the visible area left by scrolling or hidden ancestors. Heights
/// are cut at its bottom and children starting below it are not placed.
fn place(element: &Element, slot: Rect, clip: Rect, out: &mut LayoutResult) {
    let (natural_w, natural_h) = measure(element);
    let avail_w = slot.width.saturating_sub(element.margin.horizontal_total());
    let avail_h = slot.height.saturating_sub(element.margin.vertical_total());

    let width = element.width.resolve(natural_w, avail_w).min(avail_w);
    let mut height = element.height.resolve(natural_h, avail_h).min(avail_h);
    if let Some(max) = element.max_height {
        height = height.min(max);
    }

    let y = slot.y.saturating_add(element.margin.top);
    let height = height.min(clip.bottom().saturating_sub(y));
    let rect = Rect::new(slot.x.saturating_add(element.margin.left), y, width, height);
    out.rects.insert(element.id.clone(), rect);

    let border = element.style.border.thickness();
    let inner = rect.shrink(
        border + element.padding.top,
        border + element.padding.right,
        border + element.padding.bottom,
        border + element.padding.left,
    );

    let Content::Children(children) = &element.content else {
        return;
    };
    let clip = match element.overflow_y {
        Overflow::Visible => clip,
        Overflow::Hidden | Overflow::Scroll => clip.intersect(&inner),
    };

    match element.direction {
        Direction::Column => {
            let mut y = inner.y as i32 - element.scroll_offset as i32;
            for child in children {
                let (_, child_h) = measure_outer(child);
                if y >= clip.bottom() as i32 {
                    break;
                }
                if y >= inner.y as i32 {
                    let top = y.min(u16::MAX as i32) as u16;
                    place(child, Rect::new(inner.x, top, inner.width, child_h), clip, out);
                }
                y += child_h as i32 + element.gap as i32;
            }
        }
        Direction::Row => {
            let mut x = inner.x;
            for child in children {
                let (child_w, _) = measure_outer(child);
                let remaining = inner.right().saturating_sub(x);
                let slot_w = match child.width {
                    Size::Fill | Size::Percent(_) => remaining,
                    _ => child_w.min(remaining),
                };
                place(child, Rect::new(x, inner.y, slot_w, inner.height), clip, out);
                x = x.saturating_add(slot_w).saturating_add(element.gap);
            }
        }
    }
}
