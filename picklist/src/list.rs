//! The selection list itself.
//!
//! Every pass starts from a fresh [`ResolvedConfig`]. The list derives the
//! effective selection, asks the host to normalize its model when the two
//! differ, and lays the items out inside a bordered box.

use picklist_dom::layout::measure;
use picklist_dom::{Border, Content, Edges, Element, Overflow, Radius, Size};

use crate::config::{Attrs, ResolvedConfig, configure};
use crate::error::ConfigurationError;
use crate::handlers::HandlerRegistry;
use crate::renderer::{CheckboxItem, ItemRenderer, RadioItem};
use crate::selection::effective_selection;
use crate::validation::{ALLOWED_KEYS, validate};
use crate::widgets::Bordered;

/// Element data key carrying an item's position in `choices`.
pub const ITEM_INDEX: &str = "picklist.item";

/// Spacing used when the border is drawn.
pub const BORDERED_PADDING: Edges = Edges::symmetric(0, 1);

/// Spacing used when the border is hidden.
pub const UNBORDERED_MARGIN: Edges = Edges::left(1);

/// Validate, resolve and render a selection list.
///
/// A bad attribute bag fails here, before anything is resolved or drawn.
pub fn selection_list(
    attrs: Attrs,
    registry: &HandlerRegistry,
) -> Result<Element, ConfigurationError> {
    validate(ALLOWED_KEYS, &attrs.keys())?;
    let config = configure(&attrs);
    Ok(render(&config, registry))
}

/// Render one pass.
///
/// In single-select mode a model holding more than one item is cut down to
/// its first element, and that smaller set is sent to `on_change` before
/// any item is built. The host then renders again with the normalized model,
/// where the two agree and no further notification happens. This relies on
/// the host re-rendering once; it is not a loop guard.
pub fn render(config: &ResolvedConfig, registry: &HandlerRegistry) -> Element {
    let selected = effective_selection(&config.model, config.multi_select);
    if selected != config.model {
        log::debug!(
            "single-select model holds {} items, proposing {:?}",
            config.model.len(),
            selected
        );
        (config.on_change)(selected.clone());
    }

    let stray = config
        .model
        .iter()
        .filter(|item| !config.choices.contains(item))
        .count();
    if stray > 0 {
        log::debug!("{stray} selected items are not among the choices");
    }

    let renderer: &dyn ItemRenderer = match &config.item_renderer {
        Some(custom) => custom.as_ref(),
        None if config.multi_select => &CheckboxItem,
        None => &RadioItem,
    };

    let items = config.choices.iter().enumerate().map(|(index, item)| {
        renderer
            .render_item(
                item,
                &selected,
                &config.on_change,
                config.disabled,
                &config.label_fn,
                config.required,
                config.as_exclusions,
                registry,
            )
            .data(ITEM_INDEX, index.to_string())
    });

    let border = if config.hide_border {
        Border::None
    } else {
        Border::Single
    };

    let mut container = Bordered::new(Element::col().children(items))
        .border(border)
        .radius(Radius::Round)
        .build();

    container = if config.hide_border {
        container.margin(UNBORDERED_MARGIN)
    } else {
        container.padding(BORDERED_PADDING)
    };

    if let Some(width) = config.width {
        container = container.width(width);
    }
    if let Some(height) = config.height {
        container = container.height(height).overflow_y(Overflow::Scroll);
    }
    if let Some(max_height) = config.max_height {
        container = container.max_height(max_height).overflow_y(Overflow::Scroll);
    }

    log::trace!(
        "rendered {} items, {} selected",
        config.choices.len(),
        selected.len()
    );
    container
}

/// Rows left for items inside a height-capped list built by [`render`], or
/// `None` when the list grows with its items.
pub fn viewport_rows(container: &Element) -> Option<u16> {
    let outer = match (container.height, container.max_height) {
        (Size::Fixed(height), Some(max)) => height.min(max),
        (Size::Fixed(height), None) => height,
        (_, Some(max)) => max,
        _ => return None,
    };
    let chrome = container.style.border.thickness() * 2 + container.padding.vertical_total();
    Some(outer.saturating_sub(chrome))
}

fn items(container: &Element) -> &[Element] {
    match container.child_elements().first() {
        Some(column) => column.child_elements(),
        None => &[],
    }
}

/// Scroll offset that keeps item `index` in view, moving `current` as little
/// as possible.
pub fn scroll_to_item(container: &Element, index: usize, current: u16) -> u16 {
    let Some(rows) = viewport_rows(container) else {
        return 0;
    };
    let items = items(container);
    let Some(item) = items.get(index) else {
        return current;
    };

    let top = items[..index]
        .iter()
        .map(|el| measure(el).1)
        .fold(0u16, u16::saturating_add);
    let bottom = top.saturating_add(measure(item).1);

    if top < current {
        top
    } else if bottom > current.saturating_add(rows) {
        bottom.saturating_sub(rows)
    } else {
        current
    }
}

/// Scroll the item column of a list built by [`render`].
pub fn set_scroll_offset(container: &mut Element, offset: u16) {
    if let Content::Children(children) = &mut container.content
        && let Some(items) = children.first_mut()
    {
        items.scroll_offset = offset;
    }
}
