//! Input handling for the demo, kept apart from the terminal so it can be
//! driven in tests.

use crossterm::event::KeyCode;
use picklist::ListHost;

use crate::error::DemoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    host: ListHost,
    focus: usize,
    as_exclusions: bool,
}

impl App {
    pub fn new(mut host: ListHost, as_exclusions: bool) -> Result<Self, DemoError> {
        host.render()?;
        Ok(Self {
            host,
            focus: 0,
            as_exclusions,
        })
    }

    pub fn host(&self) -> &ListHost {
        &self.host
    }

    /// Focused item index, or `None` for an empty list.
    pub fn focus(&self) -> Option<usize> {
        (!self.host.choices().is_empty()).then_some(self.focus)
    }

    pub fn status_line(&self) -> String {
        let labels: Vec<String> = self.host.model().iter().map(ToString::to_string).collect();
        format!(
            " [{}] multi:{} required:{}  space toggle  m mode  r required  x exclusions  q quit",
            labels.join(", "),
            on_off(self.host.is_multi_select()),
            on_off(self.host.is_required()),
        )
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<Flow, DemoError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Flow::Quit),
            KeyCode::Up => self.move_focus(self.focus.saturating_sub(1)),
            KeyCode::Down => self.move_focus(self.focus.saturating_add(1)),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(index) = self.focus() {
                    self.host.click(index)?;
                }
            }
            KeyCode::Char('m') => {
                self.host.set_multi_select(!self.host.is_multi_select());
                self.host.render()?;
            }
            KeyCode::Char('r') => {
                self.host.set_required(!self.host.is_required());
                self.host.render()?;
            }
            KeyCode::Char('x') => {
                self.as_exclusions = !self.as_exclusions;
                self.host.set_as_exclusions(self.as_exclusions);
                self.host.render()?;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    /// Focus and activate the item under the pointer.
    pub fn handle_click(&mut self, index: usize) -> Result<(), DemoError> {
        self.move_focus(index);
        self.host.click(index)?;
        Ok(())
    }

    fn move_focus(&mut self, index: usize) {
        let last = self.host.choices().len().saturating_sub(1);
        self.focus = index.min(last);
        self.host.scroll_to(self.focus);
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use picklist::{choices, selection};
    use picklist_dom::render_lines;

    use super::*;

    fn app(items: &[&str], model: &[&str]) -> App {
        let host = ListHost::new(
            choices(items.iter().copied()),
            selection(model.iter().copied()),
        );
        App::new(host, false).unwrap()
    }

    #[test]
    fn test_activate_on_empty_list_is_ignored() {
        let mut app = app(&[], &[]);
        assert_eq!(app.focus(), None);

        assert_eq!(app.handle_key(KeyCode::Char(' ')).unwrap(), Flow::Continue);
        assert_eq!(app.handle_key(KeyCode::Down).unwrap(), Flow::Continue);
        assert_eq!(app.handle_key(KeyCode::Enter).unwrap(), Flow::Continue);
        assert!(app.host().model().is_empty());
    }

    #[test]
    fn test_space_toggles_focused_item() {
        let mut app = app(&["a", "b"], &[]);
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Char(' ')).unwrap();

        assert_eq!(app.host().model(), selection(["b"]));
    }

    #[test]
    fn test_focus_stops_at_last_item() {
        let mut app = app(&["a", "b"], &[]);
        for _ in 0..5 {
            app.handle_key(KeyCode::Down).unwrap();
        }
        assert_eq!(app.focus(), Some(1));
    }

    #[test]
    fn test_focus_scrolls_capped_list() {
        let host =
            ListHost::new(choices(["a", "b", "c", "d", "e"]), selection(["a"])).max_height(3);
        let mut app = App::new(host, false).unwrap();
        for _ in 0..3 {
            app.handle_key(KeyCode::Down).unwrap();
        }

        assert_eq!(render_lines(app.host().element(), 20, 10)[1], "│ [ ] d │");
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.host().model(), selection(["a", "d"]));
    }

    #[test]
    fn test_mode_toggle_repairs_selection() {
        let mut app = app(&["a", "b"], &["a", "b"]);
        app.handle_key(KeyCode::Char('m')).unwrap();

        assert!(!app.host().is_multi_select());
        assert_eq!(app.host().model(), selection(["a"]));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(&["a"], &[]);
        assert_eq!(app.handle_key(KeyCode::Char('q')).unwrap(), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc).unwrap(), Flow::Quit);
    }
}
