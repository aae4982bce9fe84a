//! Dropdown configuration.

use std::sync::Arc;

use crate::option::{SelectItem, SelectOption};

/// Callback invoked with the chosen value.
pub type OnSelect = Arc<dyn Fn(&str) + Send + Sync>;

/// When the typed filter text is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterReset {
    /// Keep the filter until the user edits it.
    Never,
    /// Clear the filter whenever an option is chosen.
    #[default]
    OnSelect,
    /// Clear the filter whenever the list closes, including after a choice.
    OnClose,
}

/// Configuration for a [`DropdownSelect`](crate::DropdownSelect).
///
/// Every field has a usable default, so `SelectConfig::default()` yields an
/// empty dropdown with no selection and no callback.
///
/// `selected` only seeds the widget. Changing the config after construction
/// has no effect on a live widget; use
/// [`DropdownSelect::set_selected`](crate::DropdownSelect::set_selected) to
/// drive the value from outside.
#[derive(Clone, Default)]
pub struct SelectConfig {
    pub options: Vec<SelectOption>,
    pub selected: Option<String>,
    /// Whitespace-separated class tokens appended to the root element.
    pub custom_classes: String,
    pub on_select: Option<OnSelect>,
    pub placeholder: String,
    pub filter_reset: FilterReset,
}

impl std::fmt::Debug for SelectConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectConfig")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("custom_classes", &self.custom_classes)
            .field("on_select", &self.on_select.as_ref().map(|_| "Fn(&str)"))
            .field("placeholder", &self.placeholder)
            .field("filter_reset", &self.filter_reset)
            .finish()
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: SelectItem,
    {
        self.options = items.into_iter().map(|item| item.to_option()).collect();
        self
    }

    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn custom_classes(mut self, classes: impl Into<String>) -> Self {
        self.custom_classes = classes.into();
        self
    }

    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(callback));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn filter_reset(mut self, policy: FilterReset) -> Self {
        self.filter_reset = policy;
        self
    }

    /// Custom class tokens in the order they were written.
    pub(crate) fn class_tokens(&self) -> Vec<String> {
        self.custom_classes
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
