//! RadioButton widget - one option of a mutually exclusive group.

use std::sync::Arc;

use picklist_dom::{Element, TextStyle};

use crate::choice::Choice;
use crate::handlers::{HandlerRegistry, ON_ACTIVATE};

use super::Label;
use super::checkbox::CHECKED;

/// A radio button builder.
///
/// Shows as selected when `model` equals `value`. Activation always reports
/// `value`, even when it is already selected; the caller decides what a
/// repeated click means.
#[derive(Clone)]
pub struct RadioButton {
    id: Option<String>,
    model: Option<Choice>,
    value: Choice,
    on_change: Option<Arc<dyn Fn(Choice) + Send + Sync>>,
    disabled: bool,
    label: Option<String>,
    label_style: TextStyle,
}

impl RadioButton {
    pub fn new(model: Option<Choice>, value: Choice) -> Self {
        Self {
            id: None,
            model,
            value,
            on_change: None,
            disabled: false,
            label: None,
            label_style: TextStyle::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Choice) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let selected = self.model.as_ref() == Some(&self.value);
        let indicator = if selected { "(•)" } else { "( )" };

        let mut elem = Element::row().gap(1).child(Element::text(indicator));
        if let Some(label) = self.label {
            elem = elem.child(Label::new(label).style(self.label_style).build());
        }
        if let Some(id) = self.id {
            elem = elem.id(id);
        }

        elem = elem
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .data(CHECKED, selected.to_string());

        if !self.disabled
            && let Some(on_change) = self.on_change
        {
            let value = self.value;
            registry.register(
                &elem.id,
                ON_ACTIVATE,
                Arc::new(move || on_change(value.clone())),
            );
        }

        elem
    }
}

impl std::fmt::Debug for RadioButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioButton")
            .field("id", &self.id)
            .field("model", &self.model)
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_selected_when_model_matches_value() {
        let registry = HandlerRegistry::new();
        let on = RadioButton::new(Some(Choice::from("a")), Choice::from("a")).build(&registry);
        let off = RadioButton::new(Some(Choice::from("a")), Choice::from("b")).build(&registry);
        let none = RadioButton::new(None, Choice::from("a")).build(&registry);

        assert_eq!(on.get_data(CHECKED).map(String::as_str), Some("true"));
        assert_eq!(off.get_data(CHECKED).map(String::as_str), Some("false"));
        assert_eq!(none.get_data(CHECKED).map(String::as_str), Some("false"));
    }

    #[test]
    fn test_activation_reports_value_even_when_selected() {
        let registry = HandlerRegistry::new();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        RadioButton::new(Some(Choice::from("a")), Choice::from("a"))
            .id("r")
            .on_change(move |v| *sink.lock().unwrap() = Some(v))
            .build(&registry);

        assert!(registry.dispatch("r", ON_ACTIVATE));
        assert_eq!(*seen.lock().unwrap(), Some(Choice::from("a")));
    }
}
