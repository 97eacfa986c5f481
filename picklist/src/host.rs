//! Owner side of a selection list.
//!
//! A [`ListHost`] keeps the selection model in a [`State`], renders the list
//! from it, and renders again whenever a pass or a click wrote a new model.
//! Terminal front ends and tests drive the list through it.

use std::sync::Arc;

use picklist_dom::{Element, Size, collect_clickable, find_element_by_data};

use crate::choice::{Choice, SelectionSet};
use crate::config::{Attrs, LabelFn};
use crate::error::RenderError;
use crate::handlers::{HandlerRegistry, ON_ACTIVATE};
use crate::list::{ITEM_INDEX, scroll_to_item, selection_list, set_scroll_offset};
use crate::renderer::ItemRenderer;
use crate::state::State;

/// Passes allowed before a render gives up. The single-select repair needs
/// two.
pub const MAX_PASSES: usize = 4;

pub struct ListHost {
    choices: Vec<Choice>,
    model: State<SelectionSet>,
    multi_select: State<bool>,
    required: State<bool>,
    as_exclusions: State<bool>,
    disabled: bool,
    hide_border: bool,
    width: Option<Size>,
    height: Option<Size>,
    max_height: Option<u16>,
    label_fn: Option<LabelFn>,
    item_renderer: Option<Arc<dyn ItemRenderer>>,
    registry: HandlerRegistry,
    notifications: State<Vec<SelectionSet>>,
    element: Element,
    scroll_offset: u16,
    passes: usize,
}

impl ListHost {
    pub fn new(choices: Vec<Choice>, model: SelectionSet) -> Self {
        Self {
            choices,
            model: State::new(model),
            multi_select: State::new(true),
            required: State::new(false),
            as_exclusions: State::new(false),
            disabled: false,
            hide_border: false,
            width: None,
            height: None,
            max_height: None,
            label_fn: None,
            item_renderer: None,
            registry: HandlerRegistry::new(),
            notifications: State::new(Vec::new()),
            element: Element::box_(),
            scroll_offset: 0,
            passes: 0,
        }
    }

    pub fn multi_select(self, multi_select: bool) -> Self {
        self.multi_select.set(multi_select);
        self
    }

    pub fn required(self, required: bool) -> Self {
        self.required.set(required);
        self
    }

    pub fn as_exclusions(self, as_exclusions: bool) -> Self {
        self.as_exclusions.set(as_exclusions);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hide_border(mut self, hide_border: bool) -> Self {
        self.hide_border = hide_border;
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

    pub fn label_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Choice) -> String + Send + Sync + 'static,
    {
        self.label_fn = Some(Arc::new(f));
        self
    }

    pub fn item_renderer(mut self, renderer: Arc<dyn ItemRenderer>) -> Self {
        self.item_renderer = Some(renderer);
        self
    }

    /// Current selection model.
    pub fn model(&self) -> SelectionSet {
        self.model.get()
    }

    /// Replace the model from outside the list.
    pub fn set_model(&self, model: SelectionSet) {
        self.model.set(model);
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select.get()
    }

    pub fn set_multi_select(&self, multi_select: bool) {
        self.multi_select.set(multi_select);
    }

    pub fn is_required(&self) -> bool {
        self.required.get()
    }

    pub fn set_required(&self, required: bool) {
        self.required.set(required);
    }

    pub fn set_as_exclusions(&self, as_exclusions: bool) {
        self.as_exclusions.set(as_exclusions);
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Element produced by the last completed render.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Every selection the list proposed, oldest first.
    pub fn notifications(&self) -> Vec<SelectionSet> {
        self.notifications.get()
    }

    /// Total render passes run so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Rows of items hidden above a height-capped list.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Scroll a height-capped list so the item at `index` is visible. Lists
    /// without a height cap stay at offset zero.
    pub fn scroll_to(&mut self, index: usize) {
        self.scroll_offset = scroll_to_item(&self.element, index, self.scroll_offset);
        set_scroll_offset(&mut self.element, self.scroll_offset);
    }

    fn attrs(&self) -> Attrs {
        let model = self.model.clone();
        let notifications = self.notifications.clone();

        let mut attrs = Attrs::new()
            .choices(self.choices.clone())
            .model(&self.model)
            .on_change(move |next: SelectionSet| {
                log::debug!("on_change {next:?}");
                notifications.update(|seen| seen.push(next.clone()));
                model.set(next);
            })
            .multi_select(&self.multi_select)
            .required(&self.required)
            .as_exclusions(&self.as_exclusions)
            .disabled(self.disabled)
            .hide_border(self.hide_border);

        if let Some(width) = self.width {
            attrs = attrs.width(width);
        }
        if let Some(height) = self.height {
            attrs = attrs.height(height);
        }
        if let Some(max_height) = self.max_height {
            attrs = attrs.max_height(max_height);
        }
        if let Some(label_fn) = &self.label_fn {
            let label_fn = Arc::clone(label_fn);
            attrs = attrs.label_fn(move |c| label_fn(c));
        }
        if let Some(renderer) = &self.item_renderer {
            attrs = attrs.item_renderer(Arc::clone(renderer));
        }
        attrs
    }

    /// Render until the model stops changing.
    ///
    /// A pass that calls `on_change` (the single-select repair) leaves the
    /// model dirty, so another pass follows with the normalized model.
    pub fn render(&mut self) -> Result<&Element, RenderError> {
        for pass in 1..=MAX_PASSES {
            self.model.take_dirty();
            self.registry.clear();

            let mut element = selection_list(self.attrs(), &self.registry)?;
            set_scroll_offset(&mut element, self.scroll_offset);
            self.passes += 1;

            if !self.model.take_dirty() {
                log::debug!("render settled after {pass} pass(es)");
                self.element = element;
                return Ok(&self.element);
            }
            log::debug!("model changed during pass {pass}, rendering again");
        }

        log::warn!("selection model did not settle after {MAX_PASSES} passes");
        Err(RenderError::Diverged { passes: MAX_PASSES })
    }

    /// Id of the element to activate for the item at `index`, or `None` when
    /// the item is disabled.
    pub fn item_target(&self, index: usize) -> Result<Option<String>, RenderError> {
        let item = find_element_by_data(&self.element, ITEM_INDEX, &index.to_string())
            .ok_or(RenderError::NoSuchItem(index))?;
        Ok(collect_clickable(item).into_iter().next())
    }

    /// Click the item at `index` and re-render.
    ///
    /// Returns whether a handler ran.
    pub fn click(&mut self, index: usize) -> Result<bool, RenderError> {
        match self.item_target(index)? {
            Some(id) => self.activate(&id),
            None => Ok(false),
        }
    }

    /// Activate an element by id and re-render when a handler ran.
    pub fn activate(&mut self, element_id: &str) -> Result<bool, RenderError> {
        if !self.registry.dispatch(element_id, ON_ACTIVATE) {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }
}

impl std::fmt::Debug for ListHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListHost")
            .field("choices", &self.choices)
            .field("model", &self.model.get())
            .field("multi_select", &self.multi_select.get())
            .field("required", &self.required.get())
            .field("passes", &self.passes)
            .finish()
    }
}
