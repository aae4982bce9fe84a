//! Rendering for the DropdownSelect widget.

use tuidom::{Color, Element, Role, Size, Style};

use crate::state::DropdownSelect;

/// Text of the entry shown when no option matches the filter.
pub const NO_OPTIONS_LABEL: &str = "No options found";

/// Element data key holding an option's value.
pub(crate) const OPTION_VALUE_KEY: &str = "value";

const MIN_WIDTH: u16 = 20;

const ICON_CLOSED: &str = "▾";
const ICON_OPEN: &str = "▴";

// Palette, declared in OKLCH like the rest of the theme
const SURFACE: Color = Color::oklch(0.27, 0.02, 280.0);
const TEXT: Color = Color::oklch(0.93, 0.01, 280.0);
const MUTED: Color = Color::oklch(0.65, 0.02, 280.0);
const ACCENT: Color = Color::oklch(0.62, 0.17, 300.0);

impl DropdownSelect {
    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id())
    }

    pub fn input_id(&self) -> String {
        format!("{}-input", self.id())
    }

    pub fn icon_id(&self) -> String {
        format!("{}-icon", self.id())
    }

    pub fn listbox_id(&self) -> String {
        format!("{}-listbox", self.id())
    }

    /// ID of the `index`-th rendered option.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}{index}", self.option_id_prefix())
    }

    pub fn empty_id(&self) -> String {
        format!("{}-empty", self.id())
    }

    pub(crate) fn option_id_prefix(&self) -> String {
        format!("{}-option-", self.id())
    }

    /// Build the widget's element tree for the current state.
    ///
    /// The list is only part of the tree while open.
    pub fn element(&self) -> Element {
        let state = self.snapshot();

        // Show the chosen label at full strength so it reads as a value
        let placeholder_style = if state.has_selection {
            Style::new().foreground(TEXT)
        } else {
            Style::new().foreground(MUTED).dim()
        };

        let input = Element::text_input(state.filter.clone())
            .id(self.input_id())
            .placeholder(state.label.clone())
            .width(Size::Fill)
            .style(Style::new().foreground(TEXT))
            .style_placeholder(placeholder_style);

        let icon = Element::text(if state.is_open { ICON_OPEN } else { ICON_CLOSED })
            .id(self.icon_id())
            .aria_hidden(true)
            .style(Style::new().foreground(MUTED));

        let trigger = Element::row()
            .id(self.trigger_id())
            .class("selected-value")
            .width(Size::Fill)
            .gap(1)
            .clickable(true)
            .child(input)
            .child(icon);

        let mut root = Element::col()
            .id(self.id_string())
            .classes(self.class_list())
            .min_width(MIN_WIDTH)
            .child(trigger);

        if state.is_open {
            let listbox = Element::col()
                .id(self.listbox_id())
                .role(Role::Listbox)
                .width(Size::Fill)
                .style(Style::new().background(SURFACE));

            let listbox = if state.filtered.is_empty() {
                listbox.child(
                    Element::text(NO_OPTIONS_LABEL)
                        .id(self.empty_id())
                        .width(Size::Fill)
                        .style(Style::new().foreground(MUTED).dim()),
                )
            } else {
                listbox.children(state.filtered.iter().enumerate().map(|(i, option)| {
                    let is_selected = state.selected.as_deref() == Some(option.value.as_str());
                    let item = Element::text(option.name.clone())
                        .id(self.option_id(i))
                        .role(Role::Option)
                        .clickable(true)
                        .width(Size::Fill)
                        .data(OPTION_VALUE_KEY, option.value.clone());
                    if is_selected {
                        item.class("selected")
                            .style(Style::new().background(ACCENT).foreground(TEXT).bold())
                    } else {
                        item.style(Style::new().foreground(TEXT))
                    }
                }))
            };

            root = root.child(listbox);
        }

        root
    }
}
