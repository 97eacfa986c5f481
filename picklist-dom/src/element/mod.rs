mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find the first element (depth-first) carrying `key = value` in its data.
pub fn find_element_by_data<'a>(root: &'a Element, key: &str, value: &str) -> Option<&'a Element> {
    if root.get_data(key).map(String::as_str) == Some(value) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element_by_data(child, key, value))
}

/// Collect the IDs of all clickable, enabled elements in tree order.
pub fn collect_clickable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect_clickable_into(root, &mut ids);
    ids
}

fn collect_clickable_into(element: &Element, ids: &mut Vec<String>) {
    if element.clickable && !element.disabled {
        ids.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_clickable_into(child, ids);
    }
}
