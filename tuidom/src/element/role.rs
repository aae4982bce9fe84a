/// Accessibility role of an element.
///
/// Only the roles needed by list-style widgets are modelled; elements
/// without a role are plain containers or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Listbox,
    Option,
    Textbox,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listbox => "listbox",
            Self::Option => "option",
            Self::Textbox => "textbox",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
