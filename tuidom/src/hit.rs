use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_where(layout, root, x, y, &|el| el.clickable)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_where(layout, root, x, y, &|_| true)
}

/// Find the focusable element at the given coordinates.
/// Returns None if no focusable element contains the point.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_where(layout, root, x, y, &|el| el.focusable)
}

fn hit_test_where(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.child_elements().iter().rev() {
        if let Some(id) = hit_test_where(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    if accept(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
