use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{layout, LayoutResult, Rect};
use crate::text::char_width;
use crate::types::{Border, Overflow, Radius, TextStyle};

struct BorderChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

const SINGLE: BorderChars = BorderChars {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

const ROUNDED: BorderChars = BorderChars {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

const DOUBLE: BorderChars = BorderChars {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let clip = Rect::from_size(buf.width(), buf.height());
    render_element(element, layout, buf, clip);
}

/// Lay out and render into a fresh `width` x `height` buffer and return the
/// rows as text. Trailing blank rows are dropped.
pub fn render_lines(root: &Element, width: u16, height: u16) -> Vec<String> {
    let layout = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf);

    let mut lines: Vec<String> = (0..height).map(|y| buf.row_text(y)).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer, clip: Rect) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    render_border(element, rect, clip, buf);

    let border = element.style.border.thickness();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element.style.text_style, inner.intersect(&clip), buf);
        }
        Content::Children(children) => {
            let child_clip = match element.overflow_y {
                Overflow::Visible => clip,
                Overflow::Hidden | Overflow::Scroll => clip.intersect(&inner),
            };
            for child in children {
                render_element(child, layout, buf, child_clip);
            }
        }
    }
}

fn render_text(text: &str, style: TextStyle, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let mut x = area.x;
    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > area.right() {
            break;
        }
        buf.set(x, area.y, Cell::new(ch).with_style(style));
        if width == 2 {
            let mut continuation = Cell::new(' ').with_style(style);
            continuation.wide_continuation = true;
            buf.set(x + 1, area.y, continuation);
        }
        x += width;
    }
}

fn render_border(element: &Element, rect: Rect, clip: Rect, buf: &mut Buffer) {
    let chars = match (element.style.border, element.style.radius) {
        (Border::None, _) => return,
        (Border::Single, Radius::Square) => &SINGLE,
        (Border::Single, Radius::Round) => &ROUNDED,
        (Border::Double, _) => &DOUBLE,
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let mut put = |x: u16, y: u16, ch: char| {
        if clip.contains(x, y) {
            buf.set(x, y, Cell::new(ch));
        }
    };

    for x in rect.x + 1..right {
        put(x, rect.y, chars.horizontal);
        put(x, bottom, chars.horizontal);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, chars.vertical);
        put(right, y, chars.vertical);
    }
    put(rect.x, rect.y, chars.top_left);
    put(right, rect.y, chars.top_right);
    put(rect.x, bottom, chars.bottom_left);
    put(right, bottom, chars.bottom_right);
}
