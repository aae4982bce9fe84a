use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Role};
use crate::types::{Direction, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    /// Ordered class tokens. Purely descriptive, layout ignores them.
    pub classes: Vec<String>,
    pub role: Option<Role>,

    // Content
    pub content: Content,

    // Layout
    pub width: Size,
    pub height: Size,
    pub min_width: Option<u16>,
    pub direction: Direction,
    pub gap: u16,

    // Visual
    pub style: Style,
    /// Style used for a text input's placeholder.
    pub style_placeholder: Option<Style>,

    // Interaction
    pub clickable: bool,
    pub focusable: bool,
    /// Hidden from assistive technology (decorative glyphs).
    pub aria_hidden: bool,

    // Custom data storage (option values, handler keys, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            role: None,
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            min_width: None,
            direction: Direction::Column,
            gap: 0,
            style: Style::default(),
            style_placeholder: None,
            clickable: false,
            focusable: false,
            aria_hidden: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            role: Some(Role::Textbox),
            content: Content::TextInput {
                value: value.into(),
                placeholder: None,
            },
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_placeholder(mut self, style: Style) -> Self {
        self.style_placeholder = Some(style);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn aria_hidden(mut self, hidden: bool) -> Self {
        self.aria_hidden = hidden;
        self
    }

    // Text input methods

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Current value of a text input, None for other content.
    pub fn input_value(&self) -> Option<&str> {
        match &self.content {
            Content::TextInput { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Placeholder of a text input, None for other content or when unset.
    pub fn input_placeholder(&self) -> Option<&str> {
        match &self.content {
            Content::TextInput { placeholder, .. } => placeholder.as_deref(),
            _ => None,
        }
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct children, empty for leaf content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
