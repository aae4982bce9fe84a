mod common;

use common::ab_config;
use pickbox::{DropdownSelect, SelectConfig};
use tuidom::{find_element, Buffer, Content, Rect, Role};

fn draw(select: &DropdownSelect, width: u16, height: u16) -> Buffer {
    let root = select.element();
    let layout = tuidom::layout(&root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    tuidom::render::render_to_buffer(&root, &layout, &mut buf);
    buf
}

// ============================================================================
// Element Tree
// ============================================================================

#[test]
fn test_closed_tree_has_trigger_only() {
    let select = DropdownSelect::new(ab_config());
    let root = select.element();

    assert_eq!(root.id, select.id_string());
    assert_eq!(root.child_elements().len(), 1);

    let trigger = find_element(&root, &select.trigger_id()).unwrap();
    assert!(trigger.clickable);
    assert!(find_element(&root, &select.listbox_id()).is_none());
}

#[test]
fn test_input_shows_filter_as_value_and_label_as_placeholder() {
    let select = DropdownSelect::new(ab_config());
    select.filter("x");
    let root = select.element();

    let input = find_element(&root, &select.input_id()).unwrap();
    assert_eq!(input.input_value(), Some("x"));
    assert_eq!(input.input_placeholder(), Some("B"));
    assert_eq!(input.role, Some(Role::Textbox));
}

#[test]
fn test_icon_is_decorative_and_flips() {
    let select = DropdownSelect::new(ab_config());

    let root = select.element();
    let icon = find_element(&root, &select.icon_id()).unwrap();
    assert!(icon.aria_hidden);
    assert_eq!(icon.content.display_text(), Some("▾"));

    select.open();
    let root = select.element();
    let icon = find_element(&root, &select.icon_id()).unwrap();
    assert_eq!(icon.content.display_text(), Some("▴"));
}

#[test]
fn test_open_tree_has_listbox_with_options() {
    let select = DropdownSelect::new(ab_config());
    select.open();
    let root = select.element();

    let listbox = find_element(&root, &select.listbox_id()).unwrap();
    assert_eq!(listbox.role, Some(Role::Listbox));

    let items = listbox.child_elements();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item.role, Some(Role::Option));
        assert!(item.clickable);
    }
    assert_eq!(items[0].get_data("value").map(String::as_str), Some("a"));
    assert_eq!(items[1].get_data("value").map(String::as_str), Some("b"));
}

#[test]
fn test_only_selected_option_is_marked() {
    let select = DropdownSelect::new(ab_config());
    select.open();
    let root = select.element();

    let a = find_element(&root, &select.option_id(0)).unwrap();
    let b = find_element(&root, &select.option_id(1)).unwrap();
    assert!(!a.has_class("selected"));
    assert!(b.has_class("selected"));
}

#[test]
fn test_option_content_is_name() {
    let select = DropdownSelect::new(ab_config());
    select.open();
    let root = select.element();

    let a = find_element(&root, &select.option_id(0)).unwrap();
    assert!(matches!(&a.content, Content::Text(t) if t == "A"));
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_list_order() {
    let select = DropdownSelect::new(SelectConfig::new().custom_classes("  wide  dark "));

    assert_eq!(select.class_list(), vec!["pickbox", "wide", "dark"]);

    select.open();
    assert_eq!(
        select.class_list(),
        vec!["pickbox", "wide", "dark", "options-open"]
    );
    assert_eq!(select.element().classes, select.class_list());
}

#[test]
fn test_default_classes() {
    let select = DropdownSelect::default();
    assert_eq!(select.class_list(), vec!["pickbox"]);
}

// ============================================================================
// Drawn Output
// ============================================================================

#[test]
fn test_draws_label_and_options() {
    let select = DropdownSelect::new(ab_config());
    select.open();

    let buf = draw(&select, 30, 4);

    assert!(buf.row_text(0).starts_with('B'));
    assert!(buf.row_text(0).contains('▴'));
    assert!(buf.row_text(1).starts_with('A'));
    assert!(buf.row_text(2).starts_with('B'));
    assert_eq!(buf.row_text(3).trim(), "");
}

#[test]
fn test_draws_no_options_entry() {
    let select = DropdownSelect::new(ab_config());
    select.open();
    select.filter("z");

    let buf = draw(&select, 30, 3);

    assert!(buf.row_text(0).starts_with('z'));
    assert!(buf.row_text(1).starts_with(pickbox::NO_OPTIONS_LABEL));
}

#[test]
fn test_trigger_spans_root_width() {
    let select = DropdownSelect::new(ab_config());
    let root = select.element();
    let layout = tuidom::layout(&root, Rect::from_size(80, 10));

    let root_rect = layout[&select.id_string()];
    let trigger_rect = layout[&select.trigger_id()];
    let icon_rect = layout[&select.icon_id()];

    assert_eq!(root_rect.width, 20);
    assert_eq!(trigger_rect.width, root_rect.width);
    assert_eq!(icon_rect.right(), root_rect.right());
}
