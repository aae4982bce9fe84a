mod content;
mod node;
mod role;

pub use content::Content;
pub use node::Element;
pub use role::Role;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to the element with `id`, inclusive.
/// Returns None if the element is not in the tree.
pub fn element_path(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());

    if element.id == id {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_path(child, id, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}

/// Whether `target` is `ancestor` itself or one of its descendants.
pub fn contains(ancestor: &Element, target: &str) -> bool {
    find_element(ancestor, target).is_some()
}
