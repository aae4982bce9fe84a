pub mod buffer;
pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use document::{Document, ListenerGuard, ListenerId, PointerDown};
pub use element::{contains, element_path, find_element, Content, Element, Role};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
