//! Rendering and click handling of the selection list.

use std::sync::{Arc, Mutex};

use picklist::list::{BORDERED_PADDING, ITEM_INDEX, UNBORDERED_MARGIN};
use picklist::widgets::checkbox::CHECKED;
use picklist::{
    Attrs, Choice, ConfigurationError, HandlerRegistry, ON_ACTIVATE, SelectionSet, choices,
    selection, selection_list,
};
use picklist_dom::{Border, Element, Overflow, Size, find_element_by_data, render_lines};

type Seen = Arc<Mutex<Vec<SelectionSet>>>;

fn base(items: &[&str], model: &[&str]) -> (Attrs, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let attrs = Attrs::new()
        .choices(choices(items.iter().copied()))
        .model(selection(model.iter().copied()))
        .on_change(move |set| sink.lock().unwrap().push(set));
    (attrs, seen)
}

fn item<'a>(root: &'a Element, index: usize) -> &'a Element {
    find_element_by_data(root, ITEM_INDEX, &index.to_string()).expect("item rendered")
}

fn click(root: &Element, registry: &HandlerRegistry, index: usize) -> bool {
    registry.dispatch(&item(root, index).id, ON_ACTIVATE)
}

fn seen(seen: &Seen) -> Vec<SelectionSet> {
    seen.lock().unwrap().clone()
}

#[test]
fn test_checking_unselected_item_adds_it() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["a", "b", "c"], &["a"]);
    let root = selection_list(attrs.required(false), &registry).unwrap();

    assert!(seen(&log).is_empty());
    assert!(click(&root, &registry, 1));
    assert_eq!(seen(&log), vec![selection(["a", "b"])]);
}

#[test]
fn test_required_keeps_last_checkbox() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["a", "b", "c"], &["a"]);
    let root = selection_list(attrs.required(true), &registry).unwrap();

    assert!(click(&root, &registry, 0));
    assert_eq!(seen(&log), vec![selection(["a"])]);
}

#[test]
fn test_unchecking_removes_item() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["a", "b"], &["a", "b"]);
    let root = selection_list(attrs, &registry).unwrap();

    assert!(click(&root, &registry, 0));
    assert_eq!(seen(&log), vec![selection(["b"])]);
}

#[test]
fn test_single_select_repairs_model_before_any_click() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["a", "b", "c"], &["a", "b"]);
    let root = selection_list(attrs.multi_select(false), &registry).unwrap();

    assert_eq!(seen(&log), vec![selection(["a"])]);

    let checked = |i| item(&root, i).get_data(CHECKED).cloned();
    assert_eq!(checked(0).as_deref(), Some("true"));
    assert_eq!(checked(1).as_deref(), Some("false"));
}

#[test]
fn test_normalized_model_never_repairs() {
    for (multi, model) in [(false, vec!["b"]), (false, vec![]), (true, vec!["a", "c"])] {
        let registry = HandlerRegistry::new();
        let (attrs, log) = base(&["a", "b", "c"], &model);
        selection_list(attrs.multi_select(multi), &registry).unwrap();
        assert!(seen(&log).is_empty(), "multi={multi} model={model:?}");
    }
}

#[test]
fn test_required_radio_click_on_selected_is_noop() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["x", "y"], &["x"]);
    let root = selection_list(attrs.multi_select(false).required(true), &registry).unwrap();

    assert!(click(&root, &registry, 0));
    assert_eq!(seen(&log), vec![selection(["x"])]);
}

#[test]
fn test_radio_click_on_selected_clears_when_optional() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["x", "y"], &["x"]);
    let root = selection_list(attrs.multi_select(false), &registry).unwrap();

    assert!(click(&root, &registry, 0));
    assert_eq!(seen(&log), vec![SelectionSet::new()]);
}

#[test]
fn test_radio_click_on_other_item_switches() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["x", "y"], &["x"]);
    let root = selection_list(attrs.multi_select(false).required(true), &registry).unwrap();

    assert!(click(&root, &registry, 1));
    assert_eq!(seen(&log), vec![selection(["y"])]);
}

#[test]
fn test_renders_checkboxes_in_rounded_box() {
    let registry = HandlerRegistry::new();
    let (attrs, _) = base(&["a", "b", "c"], &["a"]);
    let root = selection_list(attrs, &registry).unwrap();

    assert_eq!(
        render_lines(&root, 40, 10),
        vec![
            "╭───────╮",
            "│ [x] a │",
            "│ [ ] b │",
            "│ [ ] c │",
            "╰───────╯",
        ]
    );
}

#[test]
fn test_renders_radio_buttons_without_border() {
    let registry = HandlerRegistry::new();
    let (attrs, _) = base(&["a", "b"], &["b"]);
    let root = selection_list(attrs.multi_select(false).hide_border(true), &registry).unwrap();

    assert_eq!(render_lines(&root, 40, 10), vec![" ( ) a", " (•) b"]);
}

#[test]
fn test_border_toggles_spacing_profile() {
    let registry = HandlerRegistry::new();

    let (attrs, _) = base(&["a"], &[]);
    let bordered = selection_list(attrs, &registry).unwrap();
    assert_eq!(bordered.style.border, Border::Single);
    assert_eq!(bordered.padding, BORDERED_PADDING);

    let (attrs, _) = base(&["a"], &[]);
    let bare = selection_list(attrs.hide_border(true), &registry).unwrap();
    assert_eq!(bare.style.border, Border::None);
    assert_eq!(bare.margin, UNBORDERED_MARGIN);
    assert_eq!(bare.padding, Default::default());
}

#[test]
fn test_size_hints_pass_through() {
    let registry = HandlerRegistry::new();
    let (attrs, _) = base(&["a", "b", "c", "d", "e"], &["a"]);
    let root = selection_list(attrs.width(Size::Fixed(20)).max_height(3), &registry).unwrap();

    assert_eq!(root.width, Size::Fixed(20));
    assert_eq!(root.max_height, Some(3));
    assert_eq!(root.overflow_y, Overflow::Scroll);

    let lines = render_lines(&root, 40, 10);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].trim_end_matches('│').trim(), "│ [x] a");
}

#[test]
fn test_exclusions_strike_through_selected_labels() {
    let registry = HandlerRegistry::new();
    let (attrs, _) = base(&["a", "b"], &["a"]);
    let root = selection_list(attrs.as_exclusions(true), &registry).unwrap();

    let label = |i| item(&root, i).child_elements()[1].style.text_style.strikethrough;
    assert!(label(0));
    assert!(!label(1));
}

#[test]
fn test_selected_labels_plain_without_exclusions() {
    let registry = HandlerRegistry::new();
    let (attrs, _) = base(&["a", "b"], &["a"]);
    let root = selection_list(attrs, &registry).unwrap();

    assert!(!item(&root, 0).child_elements()[1].style.text_style.strikethrough);
}

#[test]
fn test_disabled_list_registers_no_handlers() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["a", "b"], &["a"]);
    let root = selection_list(attrs.disabled(true), &registry).unwrap();

    assert!(registry.is_empty());
    assert!(item(&root, 0).disabled);
    assert!(!click(&root, &registry, 1));
    assert!(seen(&log).is_empty());
}

#[test]
fn test_label_fn_formats_records() {
    let registry = HandlerRegistry::new();
    let items = vec![
        Choice::record([("label", Choice::from("Low")), ("sort", Choice::from(1))]),
        Choice::record([("label", Choice::from("High")), ("sort", Choice::from(2))]),
    ];
    let attrs = Attrs::new()
        .choices(items)
        .model(SelectionSet::new())
        .on_change(|_| {})
        .hide_border(true)
        .label_fn(|c| c.field("label").map(ToString::to_string).unwrap_or_default());
    let root = selection_list(attrs, &registry).unwrap();

    assert_eq!(render_lines(&root, 40, 10), vec![" [ ] Low", " [ ] High"]);
}

#[test]
fn test_stray_model_items_are_kept() {
    let registry = HandlerRegistry::new();
    let (attrs, log) = base(&["a", "b"], &["a", "zz"]);
    let root = selection_list(attrs, &registry).unwrap();

    assert!(seen(&log).is_empty());
    assert!(click(&root, &registry, 1));
    assert_eq!(seen(&log), vec![selection(["a", "b", "zz"])]);
}

#[test]
fn test_missing_required_attribute_fails_construction() {
    let registry = HandlerRegistry::new();
    let attrs = Attrs::new().choices(choices(["a"])).on_change(|_| {});

    assert_eq!(
        selection_list(attrs, &registry).unwrap_err(),
        ConfigurationError::MissingAttribute("model")
    );
    assert!(registry.is_empty());
}
