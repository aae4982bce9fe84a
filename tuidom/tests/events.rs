use tuidom::{
    collect_focusable, contains, element_path, hit_test, hit_test_any, hit_test_focusable,
    Element, FocusState, LayoutResult, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children should be "on top"
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hit_test_focusable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text_input("").id("input"))
        .child(Element::text("Not focusable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("input", Rect::new(10, 10, 30, 1)),
        ("text", Rect::new(10, 20, 30, 1)),
    ]);

    assert_eq!(
        hit_test_focusable(&layout, &root, 15, 10),
        Some("input".to_string())
    );
    assert_eq!(hit_test_focusable(&layout, &root, 15, 20), None);
}

#[test]
fn test_hit_test_skips_elements_without_layout() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("ghost").id("ghost").clickable(true));

    let layout = create_layout(&[("root", Rect::new(0, 0, 10, 10))]);

    assert_eq!(hit_test_any(&layout, &root, 1, 1), Some("root".to_string()));
}

// ============================================================================
// Tree Queries
// ============================================================================

fn nested_tree() -> Element {
    Element::col()
        .id("page")
        .child(
            Element::row()
                .id("widget")
                .child(Element::text_input("").id("widget-input"))
                .child(Element::text("▾").id("widget-icon")),
        )
        .child(Element::text("footer").id("footer"))
}

#[test]
fn test_element_path_includes_ancestors() {
    let root = nested_tree();

    assert_eq!(
        element_path(&root, "widget-icon"),
        Some(vec![
            "page".to_string(),
            "widget".to_string(),
            "widget-icon".to_string()
        ])
    );
    assert_eq!(element_path(&root, "page"), Some(vec!["page".to_string()]));
}

#[test]
fn test_element_path_missing_target() {
    let root = nested_tree();
    assert_eq!(element_path(&root, "nope"), None);
}

#[test]
fn test_contains() {
    let root = nested_tree();
    let widget = tuidom::find_element(&root, "widget").unwrap();

    assert!(contains(widget, "widget"));
    assert!(contains(widget, "widget-input"));
    assert!(!contains(widget, "footer"));
    assert!(!contains(widget, "page"));
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_collect_focusable_in_tree_order() {
    let root = Element::col()
        .id("root")
        .child(Element::text_input("").id("a"))
        .child(Element::text("skip").id("b"))
        .child(Element::col().id("c").child(Element::text_input("").id("d")));

    assert_eq!(collect_focusable(&root), vec!["a".to_string(), "d".to_string()]);
}

#[test]
fn test_focus_next_wraps() {
    let root = Element::col()
        .id("root")
        .child(Element::text_input("").id("a"))
        .child(Element::text_input("").id("b"));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("b".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
}

#[test]
fn test_focus_prev_from_nothing_picks_last() {
    let root = Element::col()
        .id("root")
        .child(Element::text_input("").id("a"))
        .child(Element::text_input("").id("b"));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_prev(&root), Some("b".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("a".to_string()));
}

#[test]
fn test_focus_and_blur() {
    let mut focus = FocusState::new();
    assert!(focus.focus("x"));
    assert!(!focus.focus("x"));
    assert_eq!(focus.focused(), Some("x"));
    assert!(focus.blur());
    assert!(!focus.blur());
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Raw Event Processing
// ============================================================================

mod process {
    use crossterm::event::{
        Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton, MouseEvent,
        MouseEventKind,
    };
    use tuidom::{Element, Event, FocusState, Key, LayoutResult, Modifiers, MouseButton, Rect};

    fn tree() -> (Element, LayoutResult) {
        let root = Element::col()
            .id("root")
            .child(Element::text_input("").id("input"))
            .child(Element::text("label").id("label"));
        let mut layout = LayoutResult::new();
        layout.insert("root".into(), Rect::new(0, 0, 20, 2));
        layout.insert("input".into(), Rect::new(0, 0, 20, 1));
        layout.insert("label".into(), Rect::new(0, 1, 20, 1));
        (root, layout)
    }

    fn mouse_down(column: u16, row: u16) -> CtEvent {
        press_with(CtButton::Left, column, row)
    }

    fn press_with(button: CtButton, column: u16, row: u16) -> CtEvent {
        CtEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_mouse_down_precedes_click() {
        let (root, layout) = tree();
        let mut focus = FocusState::new();

        let events = focus.process_events(&[mouse_down(3, 1)], &root, &layout);

        assert_eq!(
            events,
            vec![
                Event::MouseDown {
                    target: Some("label".into()),
                    x: 3,
                    y: 1,
                    button: MouseButton::Left,
                },
                Event::Click {
                    target: Some("label".into()),
                    x: 3,
                    y: 1,
                    button: MouseButton::Left,
                },
            ]
        );
    }

    #[test]
    fn test_click_focuses_input() {
        let (root, layout) = tree();
        let mut focus = FocusState::new();

        let events = focus.process_events(&[mouse_down(0, 0)], &root, &layout);

        assert!(events.contains(&Event::Focus {
            target: "input".into()
        }));
        assert_eq!(focus.focused(), Some("input"));
    }

    #[test]
    fn test_press_on_unfocusable_blurs() {
        let (root, layout) = tree();
        let mut focus = FocusState::new();
        focus.focus("input");

        let events = focus.process_events(&[mouse_down(3, 1)], &root, &layout);

        assert_eq!(focus.focused(), None);
        assert_eq!(
            events[1],
            Event::Blur {
                target: "input".into()
            }
        );
        assert!(matches!(events[2], Event::Click { .. }));
    }

    #[test]
    fn test_press_on_nothing_blurs() {
        let (root, layout) = tree();
        let mut focus = FocusState::new();
        focus.focus("input");

        let events = focus.process_events(&[mouse_down(30, 5)], &root, &layout);

        assert_eq!(focus.focused(), None);
        assert!(events.contains(&Event::Blur {
            target: "input".into()
        }));
    }

    #[test]
    fn test_press_without_focus_emits_no_blur() {
        let (root, layout) = tree();
        let mut focus = FocusState::new();

        let events = focus.process_events(&[mouse_down(3, 1)], &root, &layout);

        assert!(!events.iter().any(|e| matches!(e, Event::Blur { .. })));
    }

    #[test]
    fn test_right_press_does_not_click() {
        let (root, layout) = tree();
        let mut focus = FocusState::new();

        let events = focus.process_events(&[press_with(CtButton::Right, 3, 1)], &root, &layout);

        assert_eq!(
            events,
            vec![Event::MouseDown {
                target: Some("label".into()),
                x: 3,
                y: 1,
                button: MouseButton::Right,
            }]
        );
    }

    #[test]
    fn test_key_targets_focused_element() {
        let (root, layout) = tree();
        let mut focus = FocusState::new();
        focus.focus("input");

        let raw = CtEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        let events = focus.process_events(&[raw], &root, &layout);

        assert_eq!(
            events,
            vec![Event::Key {
                target: Some("input".into()),
                key: Key::Char('q'),
                modifiers: Modifiers::ctrl(),
            }]
        );
    }
}
