//! Options shown by the dropdown.

use serde::{Deserialize, Serialize};

/// One selectable entry: a display label and the value reported on selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label, also what the filter matches against.
    pub name: String,
    /// Identifier passed to the selection callback.
    pub value: String,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Trait for items that can be turned into dropdown options.
///
/// # Example
///
/// ```
/// use pickbox::SelectItem;
///
/// struct Priority {
///     id: u32,
///     title: &'static str,
/// }
///
/// impl SelectItem for Priority {
///     fn select_value(&self) -> String {
///         self.id.to_string()
///     }
///
///     fn select_label(&self) -> String {
///         self.title.to_string()
///     }
/// }
///
/// let option = Priority { id: 2, title: "High" }.to_option();
/// assert_eq!(option.value, "2");
/// assert_eq!(option.name, "High");
/// ```
pub trait SelectItem {
    /// Value reported when this item is chosen.
    fn select_value(&self) -> String;

    /// Text shown in the list and matched by the filter.
    fn select_label(&self) -> String;

    fn to_option(&self) -> SelectOption {
        SelectOption {
            name: self.select_label(),
            value: self.select_value(),
        }
    }
}

impl SelectItem for SelectOption {
    fn select_value(&self) -> String {
        self.value.clone()
    }

    fn select_label(&self) -> String {
        self.name.clone()
    }

    fn to_option(&self) -> SelectOption {
        self.clone()
    }
}

impl SelectItem for String {
    fn select_value(&self) -> String {
        self.clone()
    }

    fn select_label(&self) -> String {
        self.clone()
    }
}

impl SelectItem for &str {
    fn select_value(&self) -> String {
        (*self).to_string()
    }

    fn select_label(&self) -> String {
        (*self).to_string()
    }
}

// (value, label) tuples
impl<S1, S2> SelectItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn select_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn select_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}
