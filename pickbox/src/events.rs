//! Event handling for the DropdownSelect widget.

use tuidom::{element_path, find_element, Element, Event, Key, Modifiers, MouseButton, PointerDown};

use crate::render::OPTION_VALUE_KEY;
use crate::state::DropdownSelect;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl DropdownSelect {
    /// Route a host event to the widget.
    ///
    /// `root` is the tree the event was resolved against; it must contain
    /// this widget's element for clicks to be recognised. Only left-button
    /// clicks act on the widget.
    pub fn dispatch(&self, event: &Event, root: &Element) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => {
                let path = element_path(root, target).unwrap_or_default();
                self.on_click(&path, root)
            }
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == self.input_id() => self.on_key(*key, *modifiers),
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click whose target sits at the end of `path`.
    ///
    /// Clicks bubble: a press on the input or icon counts as a press on the
    /// trigger row.
    pub fn on_click(&self, path: &[String], root: &Element) -> EventResult {
        let option_prefix = self.option_id_prefix();

        if let Some(option_id) = path.iter().rev().find(|id| id.starts_with(&option_prefix)) {
            let value = find_element(root, option_id)
                .and_then(|el| el.get_data(OPTION_VALUE_KEY))
                .cloned();
            return match value {
                Some(value) => {
                    self.select(&value);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            };
        }

        let trigger_id = self.trigger_id();
        if path.iter().any(|id| *id == trigger_id) {
            self.toggle();
            return EventResult::Consumed;
        }

        EventResult::Ignored
    }

    /// Handle a key typed into the trigger input.
    pub fn on_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        if modifiers.ctrl {
            return match key {
                Key::Char('u') => {
                    self.filter("");
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }
        if modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(c) => {
                self.edit_filter(|text| text.push(c));
                EventResult::Consumed
            }
            Key::Backspace => {
                self.edit_filter(|text| {
                    text.pop();
                });
                EventResult::Consumed
            }
            Key::Escape if self.is_open() => {
                self.close();
                EventResult::Consumed
            }
            Key::Enter | Key::Down if !self.is_open() => {
                self.open();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Close the list when a press lands outside this widget's root element.
    pub fn on_pointer_down(&self, event: &PointerDown) {
        if self.is_open() && !event.is_within(&self.id_string()) {
            log::debug!(
                "[pickbox] {} outside press on {:?}, closing",
                self.id(),
                event.target
            );
            self.close();
        }
    }
}
