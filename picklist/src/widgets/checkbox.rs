//! Checkbox widget - a toggleable box with a label.

use std::sync::Arc;

use picklist_dom::{Element, TextStyle};

use crate::handlers::{HandlerRegistry, ON_ACTIVATE};

use super::Label;

/// Element data key holding `"true"` / `"false"` for the checked state.
pub const CHECKED: &str = "checked";

/// A checkbox builder.
///
/// The checkbox holds no state: `model` is the value to show and
/// `on_change` receives the toggled value when the row is activated.
///
/// # Example
///
/// ```
/// use picklist::HandlerRegistry;
/// use picklist::widgets::Checkbox;
///
/// let registry = HandlerRegistry::new();
/// let element = Checkbox::new(false)
///     .label("Send reminders")
///     .on_change(|ticked| assert!(ticked))
///     .build(&registry);
///
/// assert!(element.clickable);
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Checkbox {
    id: Option<String>,
    model: bool,
    on_change: Option<Arc<dyn Fn(bool) + Send + Sync>>,
    disabled: bool,
    label: Option<String>,
    label_style: TextStyle,
}

impl Checkbox {
    pub fn new(model: bool) -> Self {
        Self {
            model,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
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

    /// Build the checkbox row.
    ///
    /// Registers the toggle handler unless disabled.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let indicator = if self.model { "[x]" } else { "[ ]" };

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
            .data(CHECKED, self.model.to_string());

        if !self.disabled
            && let Some(on_change) = self.on_change
        {
            let next = !self.model;
            registry.register(&elem.id, ON_ACTIVATE, Arc::new(move || on_change(next)));
        }

        elem
    }
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("id", &self.id)
            .field("model", &self.model)
            .field("disabled", &self.disabled)
            .field("label", &self.label)
            .finish()
    }
}
