//! Raw-mode terminal that paints an element tree.

use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use picklist::list::ITEM_INDEX;
use picklist_dom::{Buffer, Element, LayoutResult, Rect, TextStyle, layout, render_to_buffer};

pub struct Terminal {
    stdout: io::Stdout,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            last_layout: LayoutResult::default(),
        })
    }

    /// Paint `root` above a one-line status bar. The element tagged with
    /// `focus` as its item index is drawn reversed.
    pub fn draw(&mut self, root: &Element, focus: Option<usize>, status: &str) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let body = Rect::from_size(width, height.saturating_sub(1));

        self.last_layout = layout(root, body);
        let mut buf = Buffer::new(width, height);
        render_to_buffer(root, &self.last_layout, &mut buf);

        let focused = focus.and_then(|index| self.item_rect(root, index));

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;
        for y in 0..body.height {
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            for x in 0..width {
                let Some(cell) = buf.get(x, y) else { continue };
                if cell.wide_continuation {
                    continue;
                }
                let reversed = focused.is_some_and(|rect| rect.contains(x, y));
                self.write_cell(cell.char, cell.style, reversed)?;
            }
        }

        queue!(
            self.stdout,
            cursor::MoveTo(0, height.saturating_sub(1)),
            SetAttribute(Attribute::Dim),
            Print(status),
            SetAttribute(Attribute::Reset)
        )?;
        self.stdout.flush()
    }

    fn write_cell(&mut self, ch: char, style: TextStyle, reversed: bool) -> io::Result<()> {
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if style.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }
        if style.strikethrough {
            queue!(self.stdout, SetAttribute(Attribute::CrossedOut))?;
        }
        if reversed {
            queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
        }
        queue!(self.stdout, Print(ch))?;
        if style != TextStyle::new() || reversed {
            queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn item_rect(&self, root: &Element, index: usize) -> Option<Rect> {
        let item = picklist_dom::find_element_by_data(root, ITEM_INDEX, &index.to_string())?;
        self.last_layout.get(&item.id).copied()
    }

    /// Item index under a screen position, from the last draw.
    pub fn item_at(&self, root: &Element, x: u16, y: u16) -> Option<usize> {
        item_at(root, &self.last_layout, x, y)
    }
}

fn item_at(element: &Element, layout: &LayoutResult, x: u16, y: u16) -> Option<usize> {
    if let Some(index) = element.get_data(ITEM_INDEX) {
        let hit = layout.get(&element.id).is_some_and(|rect| rect.contains(x, y));
        return if hit { index.parse().ok() } else { None };
    }
    element
        .child_elements()
        .iter()
        .find_map(|child| item_at(child, layout, x, y))
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use picklist::{ListHost, choices, selection};

    use super::*;

    #[test]
    fn test_item_at_finds_row_under_point() {
        let mut host = ListHost::new(choices(["a", "b", "c"]), selection(["a"]));
        host.render().unwrap();
        let root = host.element();
        let result = layout(root, Rect::from_size(20, 10));

        // Border on row 0, items on rows 1..=3.
        assert_eq!(item_at(root, &result, 3, 1), Some(0));
        assert_eq!(item_at(root, &result, 3, 3), Some(2));
        assert_eq!(item_at(root, &result, 3, 0), None);
    }

    #[test]
    fn test_item_at_ignores_rows_below_capped_list() {
        let mut host =
            ListHost::new(choices(["a", "b", "c", "d", "e"]), selection(["a"])).max_height(3);
        host.render().unwrap();
        let root = host.element();
        let result = layout(root, Rect::from_size(20, 10));

        assert_eq!(item_at(root, &result, 3, 1), Some(0));
        for row in 2..10 {
            assert_eq!(item_at(root, &result, 3, row), None);
        }
    }

    #[test]
    fn test_item_at_follows_scroll() {
        let mut host =
            ListHost::new(choices(["a", "b", "c", "d", "e"]), selection(["a"])).max_height(3);
        host.render().unwrap();
        host.scroll_to(4);
        let root = host.element();
        let result = layout(root, Rect::from_size(20, 10));

        assert_eq!(item_at(root, &result, 3, 1), Some(4));
        assert_eq!(item_at(root, &result, 3, 2), None);
    }
}
