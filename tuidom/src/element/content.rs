#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Single-line editable text. The placeholder is shown only while
    /// `value` is empty.
    TextInput {
        value: String,
        placeholder: Option<String>,
    },
    Children(Vec<super::Element>),
}

impl Content {
    /// Text that would be drawn for this content, if any.
    pub fn display_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::TextInput { value, placeholder } => {
                if value.is_empty() {
                    placeholder.as_deref()
                } else {
                    Some(value)
                }
            }
            Self::None | Self::Children(_) => None,
        }
    }
}
