//! Per-item rendering strategies.
//!
//! The list turns every choice into one element through an [`ItemRenderer`].
//! [`CheckboxItem`] and [`RadioItem`] are the built-ins, picked by the
//! multi-select flag; a caller may supply any other implementation.

use std::sync::Arc;

use picklist_dom::{Element, TextStyle};

use crate::choice::{Choice, SelectionSet};
use crate::config::{LabelFn, OnChange};
use crate::handlers::HandlerRegistry;
use crate::selection::{check_clicked, radio_clicked};
use crate::widgets::{Checkbox, RadioButton};

/// Produces the element for one choice.
///
/// `selections` is the effective selection for this pass (at most one item
/// in single-select mode). Interactive output registers its handlers in
/// `registry`; those handlers should end in a call to `on_change` with the
/// proposed next selection.
pub trait ItemRenderer: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    fn render_item(
        &self,
        item: &Choice,
        selections: &SelectionSet,
        on_change: &OnChange,
        disabled: bool,
        label_fn: &LabelFn,
        required: bool,
        as_exclusions: bool,
        registry: &HandlerRegistry,
    ) -> Element;
}

impl<F> ItemRenderer for F
where
    F: Fn(
            &Choice,
            &SelectionSet,
            &OnChange,
            bool,
            &LabelFn,
            bool,
            bool,
            &HandlerRegistry,
        ) -> Element
        + Send
        + Sync,
{
    fn render_item(
        &self,
        item: &Choice,
        selections: &SelectionSet,
        on_change: &OnChange,
        disabled: bool,
        label_fn: &LabelFn,
        required: bool,
        as_exclusions: bool,
        registry: &HandlerRegistry,
    ) -> Element {
        self(
            item,
            selections,
            on_change,
            disabled,
            label_fn,
            required,
            as_exclusions,
            registry,
        )
    }
}

/// Wrap a closure as a shareable renderer.
pub fn renderer_fn<F>(f: F) -> Arc<dyn ItemRenderer>
where
    F: Fn(
            &Choice,
            &SelectionSet,
            &OnChange,
            bool,
            &LabelFn,
            bool,
            bool,
            &HandlerRegistry,
        ) -> Element
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Label style for an item: struck through when it is selected in an
/// exclusion list.
pub fn label_style(selected: bool, as_exclusions: bool) -> TextStyle {
    if as_exclusions && selected {
        TextStyle::new().strikethrough()
    } else {
        TextStyle::new()
    }
}

/// Default multi-select row: a checkbox toggling the item in or out.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxItem;

impl ItemRenderer for CheckboxItem {
    fn render_item(
        &self,
        item: &Choice,
        selections: &SelectionSet,
        on_change: &OnChange,
        disabled: bool,
        label_fn: &LabelFn,
        required: bool,
        as_exclusions: bool,
        registry: &HandlerRegistry,
    ) -> Element {
        let checked = selections.contains(item);
        let selections = selections.clone();
        let choice = item.clone();
        let on_change = Arc::clone(on_change);

        Checkbox::new(checked)
            .label(label_fn(item))
            .label_style(label_style(checked, as_exclusions))
            .disabled(disabled)
            .on_change(move |ticked| {
                on_change(check_clicked(&selections, &choice, ticked, required));
            })
            .build(registry)
    }
}

/// Default single-select row: a radio button for the item.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioItem;

impl ItemRenderer for RadioItem {
    fn render_item(
        &self,
        item: &Choice,
        selections: &SelectionSet,
        on_change: &OnChange,
        disabled: bool,
        label_fn: &LabelFn,
        required: bool,
        as_exclusions: bool,
        registry: &HandlerRegistry,
    ) -> Element {
        let current = selections.first().cloned();
        let checked = current.as_ref() == Some(item);
        let selections = selections.clone();
        let on_change = Arc::clone(on_change);

        RadioButton::new(current, item.clone())
            .label(label_fn(item))
            .label_style(label_style(checked, as_exclusions))
            .disabled(disabled)
            .on_change(move |value| {
                on_change(radio_clicked(&selections, &value, required));
            })
            .build(registry)
    }
}
