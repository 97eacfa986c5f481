use picklist_dom::{
    collect_clickable, find_element_by_data, layout, render_lines, render_to_buffer, Border,
    Buffer, Edges, Element, Overflow, Radius, Rect, TextStyle,
};

#[test]
fn test_render_bordered_box_text() {
    let root = Element::box_()
        .border(Border::Single)
        .padding(Edges::symmetric(0, 1))
        .child(Element::text("hi"));

    let lines = render_lines(&root, 10, 5);
    assert_eq!(lines, vec!["┌────┐", "│ hi │", "└────┘"]);
}

#[test]
fn test_render_rounded_corners() {
    let root = Element::box_()
        .border(Border::Single)
        .radius(Radius::Round)
        .child(Element::text("ok"));

    let lines = render_lines(&root, 10, 5);
    assert_eq!(lines, vec!["╭──╮", "│ok│", "╰──╯"]);
}

#[test]
fn test_text_style_reaches_cells() {
    let root =
        Element::col().child(Element::text("gone").text_style(TextStyle::new().strikethrough()));

    let result = layout(&root, Rect::from_size(10, 1));
    let mut buf = Buffer::new(10, 1);
    render_to_buffer(&root, &result, &mut buf);

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.char, 'g');
    assert!(cell.style.strikethrough);
    assert!(!buf.get(5, 0).unwrap().style.strikethrough);
}

#[test]
fn test_overflow_hidden_clips_children() {
    let root = Element::col()
        .max_height(2)
        .overflow_y(Overflow::Scroll)
        .children(["a", "b", "c", "d"].map(Element::text));

    assert_eq!(render_lines(&root, 5, 10), vec!["a", "b"]);
}

#[test]
fn test_scroll_offset_shifts_view() {
    let root = Element::col()
        .max_height(2)
        .overflow_y(Overflow::Scroll)
        .scroll_offset(2)
        .children(["a", "b", "c", "d"].map(Element::text));

    assert_eq!(render_lines(&root, 5, 10), vec!["c", "d"]);
}

#[test]
fn test_collect_clickable_skips_disabled() {
    let root = Element::col()
        .child(Element::row().id("one").clickable(true))
        .child(Element::row().id("two").clickable(true).disabled(true))
        .child(Element::row().id("three").clickable(true));

    assert_eq!(collect_clickable(&root), vec!["one", "three"]);
}

#[test]
fn test_find_element_by_data() {
    let root = Element::col()
        .child(Element::row().id("first").data("item", "0"))
        .child(Element::row().id("second").data("item", "1"));

    let found = find_element_by_data(&root, "item", "1").map(|el| el.id.as_str());
    assert_eq!(found, Some("second"));
    assert!(find_element_by_data(&root, "item", "2").is_none());
}
