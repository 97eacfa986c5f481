//! Attribute bag and its resolution into a plain configuration snapshot.

use std::fmt;
use std::sync::Arc;

use picklist_dom::Size;

use crate::choice::{Choice, SelectionSet};
use crate::renderer::ItemRenderer;
use crate::state::State;
use crate::validation;

/// Receives every selection the list proposes.
pub type OnChange = Arc<dyn Fn(SelectionSet) + Send + Sync>;

/// Text shown for a choice.
pub type LabelFn = Arc<dyn Fn(&Choice) -> String + Send + Sync>;

/// An attribute value: either a plain snapshot or a host-owned cell read at
/// resolve time.
#[derive(Debug, Clone)]
pub enum Value<T> {
    Plain(T),
    Reactive(State<T>),
}

impl<T: Clone> Value<T> {
    /// Current plain value.
    pub fn resolve(&self) -> T {
        match self {
            Value::Plain(v) => v.clone(),
            Value::Reactive(state) => state.get(),
        }
    }
}

impl<T> From<State<T>> for Value<T> {
    fn from(state: State<T>) -> Self {
        Value::Reactive(state)
    }
}

impl<T> From<&State<T>> for Value<T> {
    fn from(state: &State<T>) -> Self {
        Value::Reactive(state.clone())
    }
}

impl From<bool> for Value<bool> {
    fn from(v: bool) -> Self {
        Value::Plain(v)
    }
}

impl From<Vec<Choice>> for Value<Vec<Choice>> {
    fn from(v: Vec<Choice>) -> Self {
        Value::Plain(v)
    }
}

impl From<SelectionSet> for Value<SelectionSet> {
    fn from(v: SelectionSet) -> Self {
        Value::Plain(v)
    }
}

/// Attributes for a selection list, as the caller supplies them.
///
/// Only the keys that were set are reported by [`Attrs::keys`], which is
/// what the attribute validator checks.
///
/// # Example
///
/// ```
/// use picklist::{Attrs, HandlerRegistry, choices, selection, selection_list};
///
/// let registry = HandlerRegistry::new();
/// let attrs = Attrs::new()
///     .choices(choices(["red", "green", "blue"]))
///     .model(selection(["green"]))
///     .on_change(|set| println!("now {} selected", set.len()))
///     .required(true);
///
/// let element = selection_list(attrs, &registry).unwrap();
/// assert_eq!(element.child_elements().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Attrs {
    choices: Option<Value<Vec<Choice>>>,
    model: Option<Value<SelectionSet>>,
    on_change: Option<OnChange>,
    multi_select: Option<Value<bool>>,
    as_exclusions: Option<Value<bool>>,
    required: Option<Value<bool>>,
    disabled: Option<Value<bool>>,
    hide_border: Option<Value<bool>>,
    width: Option<Size>,
    height: Option<Size>,
    max_height: Option<u16>,
    item_renderer: Option<Arc<dyn ItemRenderer>>,
    label_fn: Option<LabelFn>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choices(mut self, choices: impl Into<Value<Vec<Choice>>>) -> Self {
        self.choices = Some(choices.into());
        self
    }

    pub fn model(mut self, model: impl Into<Value<SelectionSet>>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(SelectionSet) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn multi_select(mut self, v: impl Into<Value<bool>>) -> Self {
        self.multi_select = Some(v.into());
        self
    }

    /// Show selected labels struck through.
    pub fn as_exclusions(mut self, v: impl Into<Value<bool>>) -> Self {
        self.as_exclusions = Some(v.into());
        self
    }

    /// Forbid the list's own clicks from emptying a non-empty selection.
    pub fn required(mut self, v: impl Into<Value<bool>>) -> Self {
        self.required = Some(v.into());
        self
    }

    pub fn disabled(mut self, v: impl Into<Value<bool>>) -> Self {
        self.disabled = Some(v.into());
        self
    }

    pub fn hide_border(mut self, v: impl Into<Value<bool>>) -> Self {
        self.hide_border = Some(v.into());
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = Some(height);
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Replace the built-in checkbox/radio rows.
    pub fn item_renderer(mut self, renderer: Arc<dyn ItemRenderer>) -> Self {
        self.item_renderer = Some(renderer);
        self
    }

    pub fn label_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Choice) -> String + Send + Sync + 'static,
    {
        self.label_fn = Some(Arc::new(f));
        self
    }

    /// Keys of the attributes that were set.
    pub fn keys(&self) -> Vec<&'static str> {
        let present = [
            (validation::CHOICES, self.choices.is_some()),
            (validation::MODEL, self.model.is_some()),
            (validation::ON_CHANGE, self.on_change.is_some()),
            (validation::MULTI_SELECT, self.multi_select.is_some()),
            (validation::AS_EXCLUSIONS, self.as_exclusions.is_some()),
            (validation::REQUIRED, self.required.is_some()),
            (validation::DISABLED, self.disabled.is_some()),
            (validation::HIDE_BORDER, self.hide_border.is_some()),
            (validation::WIDTH, self.width.is_some()),
            (validation::HEIGHT, self.height.is_some()),
            (validation::MAX_HEIGHT, self.max_height.is_some()),
            (validation::ITEM_RENDERER, self.item_renderer.is_some()),
            (validation::LABEL_FN, self.label_fn.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(key, set)| set.then_some(key))
            .collect()
    }

    /// Resolve into a plain snapshot. See [`configure`].
    pub fn resolve(&self) -> ResolvedConfig {
        configure(self)
    }
}

impl fmt::Debug for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attrs").field("keys", &self.keys()).finish()
    }
}

/// Attributes with defaults applied and reactive values read.
#[derive(Clone)]
pub struct ResolvedConfig {
    pub choices: Vec<Choice>,
    pub model: SelectionSet,
    pub on_change: OnChange,
    pub multi_select: bool,
    pub as_exclusions: bool,
    pub required: bool,
    pub disabled: bool,
    pub hide_border: bool,
    pub label_fn: LabelFn,
    pub item_renderer: Option<Arc<dyn ItemRenderer>>,
    pub width: Option<Size>,
    pub height: Option<Size>,
    pub max_height: Option<u16>,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("choices", &self.choices)
            .field("model", &self.model)
            .field("multi_select", &self.multi_select)
            .field("as_exclusions", &self.as_exclusions)
            .field("required", &self.required)
            .field("disabled", &self.disabled)
            .field("hide_border", &self.hide_border)
            .field("custom_renderer", &self.item_renderer.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("max_height", &self.max_height)
            .finish()
    }
}

/// Label used when the caller gives no `label_fn`.
pub fn default_label(choice: &Choice) -> String {
    choice.to_string()
}

/// Apply defaults and read every reactive value once.
///
/// Never fails: a missing required attribute resolves to an empty value.
/// Key checking is [`validation::validate`]'s job and runs first.
pub fn configure(attrs: &Attrs) -> ResolvedConfig {
    let flag =
        |v: &Option<Value<bool>>, default: bool| v.as_ref().map_or(default, Value::resolve);

    ResolvedConfig {
        choices: attrs
            .choices
            .as_ref()
            .map(Value::resolve)
            .unwrap_or_default(),
        model: attrs.model.as_ref().map(Value::resolve).unwrap_or_default(),
        on_change: attrs
            .on_change
            .clone()
            .unwrap_or_else(|| Arc::new(|_: SelectionSet| {})),
        multi_select: flag(&attrs.multi_select, true),
        as_exclusions: flag(&attrs.as_exclusions, false),
        required: flag(&attrs.required, false),
        disabled: flag(&attrs.disabled, false),
        hide_border: flag(&attrs.hide_border, false),
        label_fn: attrs
            .label_fn
            .clone()
            .unwrap_or_else(|| Arc::new(default_label)),
        item_renderer: attrs.item_renderer.clone(),
        width: attrs.width,
        height: attrs.height,
        max_height: attrs.max_height,
    }
}
