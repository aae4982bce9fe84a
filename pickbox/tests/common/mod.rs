#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use pickbox::{DropdownSelect, SelectConfig};
use tuidom::{Document, Element, Event, Key, Modifiers, MouseButton, PointerDown};

/// Options A/a and B/b, selected "b", placeholder "Choose".
pub fn ab_config() -> SelectConfig {
    SelectConfig::new()
        .options([("a", "A"), ("b", "B")])
        .selected("b")
        .placeholder("Choose")
}

/// Records every value passed to the selection callback.
pub fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (calls, move |value: &str| {
        sink.lock().unwrap().push(value.to_string())
    })
}

/// A page holding the given widgets followed by an unrelated text element.
pub fn page(selects: &[&DropdownSelect]) -> Element {
    Element::col()
        .id("page")
        .children(selects.iter().map(|s| s.element()))
        .child(Element::text("elsewhere").id("elsewhere"))
}

/// Press and click `target` the way the host does: document listeners see
/// the press first, then the click reaches the widget.
pub fn click(document: &Document, select: &DropdownSelect, target: &str) {
    click_with(document, select, target, MouseButton::Left);
}

pub fn click_with(document: &Document, select: &DropdownSelect, target: &str, button: MouseButton) {
    let root = page(&[select]);
    press_with(document, &root, target, button);
    select.dispatch(
        &Event::Click {
            target: Some(target.to_string()),
            x: 0,
            y: 0,
            button,
        },
        &root,
    );
}

pub fn press(document: &Document, root: &Element, target: &str) {
    press_with(document, root, target, MouseButton::Left);
}

pub fn press_with(document: &Document, root: &Element, target: &str, button: MouseButton) {
    document.dispatch_pointer_down(&PointerDown::resolve(root, Some(target), 0, 0, button));
}

pub fn type_text(select: &DropdownSelect, text: &str) {
    let root = page(&[select]);
    for c in text.chars() {
        select.dispatch(
            &Event::Key {
                target: Some(select.input_id()),
                key: Key::Char(c),
                modifiers: Modifiers::new(),
            },
            &root,
        );
    }
}

/// Names of the rendered option items, None when the list is not rendered.
pub fn rendered_names(select: &DropdownSelect) -> Option<Vec<String>> {
    let root = select.element();
    let listbox = tuidom::find_element(&root, &select.listbox_id())?;
    Some(
        listbox
            .child_elements()
            .iter()
            .filter(|el| el.role == Some(tuidom::Role::Option))
            .filter_map(|el| match &el.content {
                tuidom::Content::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect(),
    )
}
