use tuidom::layout::intrinsic_size;
use tuidom::{Element, LayoutResult, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    tuidom::layout::layout(root, Rect::new(0, 0, width, height))
}

// ============================================================================
// Intrinsic Size
// ============================================================================

#[test]
fn test_text_intrinsic_size() {
    assert_eq!(intrinsic_size(&Element::text("hello")), (5, 1));
    assert_eq!(intrinsic_size(&Element::text("")), (0, 1));
}

#[test]
fn test_text_input_sizes_to_longer_of_value_and_placeholder() {
    let input = Element::text_input("ab").placeholder("Choose one");
    // Placeholder is 10 wide, plus one caret cell
    assert_eq!(intrinsic_size(&input), (11, 1));

    let input = Element::text_input("a much longer value").placeholder("x");
    assert_eq!(intrinsic_size(&input), (20, 1));
}

#[test]
fn test_min_width_applies() {
    let el = Element::text("ab").min_width(8);
    assert_eq!(intrinsic_size(&el), (8, 1));
}

#[test]
fn test_column_and_row_intrinsic_size() {
    let col = Element::col()
        .gap(1)
        .child(Element::text("abc"))
        .child(Element::text("abcdef"));
    assert_eq!(intrinsic_size(&col), (6, 3));

    let row = Element::row()
        .gap(1)
        .child(Element::text("abc"))
        .child(Element::text("abcdef"));
    assert_eq!(intrinsic_size(&row), (10, 1));
}

// ============================================================================
// Stacking
// ============================================================================

#[test]
fn test_column_stacks_children_vertically() {
    let root = Element::col()
        .id("root")
        .child(Element::text("first").id("a"))
        .child(Element::text("second").id("b"))
        .child(Element::text("third").id("c"));

    let layout = layout_root(&root, 40, 10);

    assert_eq!(layout["root"], Rect::new(0, 0, 6, 3));
    assert_eq!(layout["a"], Rect::new(0, 0, 5, 1));
    assert_eq!(layout["b"], Rect::new(0, 1, 6, 1));
    assert_eq!(layout["c"], Rect::new(0, 2, 5, 1));
}

#[test]
fn test_row_places_children_side_by_side_with_gap() {
    let root = Element::row()
        .id("root")
        .gap(1)
        .child(Element::text("ab").id("a"))
        .child(Element::text("cd").id("b"));

    let layout = layout_root(&root, 40, 10);

    assert_eq!(layout["a"], Rect::new(0, 0, 2, 1));
    assert_eq!(layout["b"], Rect::new(3, 0, 2, 1));
}

#[test]
fn test_fill_child_takes_leftover_width() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .child(Element::text_input("").id("input").width(Size::Fill))
        .child(Element::text("▾").id("icon"));

    let layout = layout_root(&root, 80, 10);

    assert_eq!(layout["root"].width, 20);
    assert_eq!(layout["input"], Rect::new(0, 0, 19, 1));
    assert_eq!(layout["icon"], Rect::new(19, 0, 1, 1));
}

#[test]
fn test_fixed_size_clamped_to_available() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(50));

    let layout = layout_root(&root, 30, 20);

    assert_eq!(layout["root"], Rect::new(0, 0, 30, 20));
}

#[test]
fn test_children_past_the_edge_get_empty_rects() {
    let root = Element::col()
        .id("root")
        .height(Size::Fixed(1))
        .child(Element::text("one").id("a"))
        .child(Element::text("two").id("b"));

    let layout = layout_root(&root, 10, 10);

    assert_eq!(layout["a"].height, 1);
    assert!(layout["b"].is_empty());
}
