use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::hit::{hit_test_any, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.step(root, |idx, len| (idx + 1) % len, |_| 0)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.step(root, |idx, len| (idx + len - 1) % len, |len| len - 1)
    }

    fn step(
        &mut self,
        root: &Element,
        from_current: impl Fn(usize, usize) -> usize,
        from_none: impl Fn(usize) -> usize,
    ) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let len = focusable.len();
        let idx = self
            .focused
            .as_ref()
            .and_then(|current| focusable.iter().position(|id| id == current))
            .map(|i| from_current(i, len))
            .unwrap_or_else(|| from_none(len));

        let new_focus = focusable[idx].clone();
        if self.focus(&new_focus) {
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// A mouse press yields `MouseDown` first, then any focus change, then
    /// `Click`, all targeted at the deepest element under the pointer. A press
    /// on nothing focusable blurs the focused element. Only the left button
    /// produces `Click`.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let Ok(key) = Key::try_from(key_event.code) else {
                        continue;
                    };
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if matches!(key, Key::Tab | Key::BackTab) {
                        let old = self.focused.clone();
                        let new = if key == Key::Tab {
                            self.focus_next(root)
                        } else {
                            self.focus_prev(root)
                        };
                        if let Some(new) = new {
                            if let Some(old) = old {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }
                CrosstermEvent::Mouse(mouse) => {
                    let MouseEventKind::Down(button) = mouse.kind else {
                        continue;
                    };
                    let (x, y) = (mouse.column, mouse.row);
                    let button: MouseButton = button.into();
                    let target = hit_test_any(layout, root, x, y);

                    events.push(Event::MouseDown {
                        target: target.clone(),
                        x,
                        y,
                        button,
                    });

                    match hit_test_focusable(layout, root, x, y) {
                        Some(focus_target) => {
                            let old = self.focused.clone();
                            if self.focus(&focus_target) {
                                log::debug!("[focus] click focused {focus_target}");
                                if let Some(old) = old {
                                    events.push(Event::Blur { target: old });
                                }
                                events.push(Event::Focus {
                                    target: focus_target,
                                });
                            }
                        }
                        // Pressing anywhere unfocusable takes focus away
                        None => {
                            if let Some(old) = self.focused.take() {
                                log::debug!("[focus] press outside focusable, blurred {old}");
                                events.push(Event::Blur { target: old });
                            }
                        }
                    }

                    // Only the primary button clicks
                    if button == MouseButton::Left {
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button,
                        });
                    }
                }
                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }
                _ => {}
            }
        }

        events
    }
}

/// IDs of all focusable elements, in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}
