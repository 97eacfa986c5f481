//! Selection transitions.
//!
//! Pure functions: a click on an item plus the current selection gives the
//! next selection. The list hands the result to `on_change`; it never keeps
//! it.

use crate::choice::{Choice, SelectionSet};

/// Next selection after a checkbox toggle.
///
/// With `required`, the sole remaining selection is never removed, whatever
/// `ticked` says.
pub fn check_clicked(
    selections: &SelectionSet,
    item: &Choice,
    ticked: bool,
    required: bool,
) -> SelectionSet {
    let only_item = if selections.len() == 1 {
        selections.first()
    } else {
        None
    };

    if required && only_item == Some(item) {
        return selections.clone();
    }

    let mut next = selections.clone();
    if ticked {
        next.insert(item.clone());
    } else {
        next.remove(item);
    }
    next
}

/// Next selection after a radio button click.
///
/// Clicking the selected item deselects it unless `required`; clicking any
/// other item selects exactly that item.
pub fn radio_clicked(selections: &SelectionSet, item: &Choice, required: bool) -> SelectionSet {
    let is_selected = selections.contains(item);

    if required && is_selected {
        selections.clone()
    } else if is_selected {
        SelectionSet::new()
    } else {
        SelectionSet::from([item.clone()])
    }
}

/// The selection the list renders with: the whole model in multi-select
/// mode, at most its first element otherwise.
pub fn effective_selection(model: &SelectionSet, multi_select: bool) -> SelectionSet {
    if multi_select {
        model.clone()
    } else {
        model.first().cloned().into_iter().collect()
    }
}
