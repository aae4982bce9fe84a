//! Document-level event listeners.
//!
//! Widgets that need to observe interaction anywhere on screen (for example
//! to close a popup when the user clicks elsewhere) subscribe here instead
//! of hooking the event loop. Each subscription is owned by a
//! [`ListenerGuard`]; dropping the guard removes the listener.

use std::sync::{Arc, RwLock, Weak};

use crate::element::{element_path, Element};
use crate::event::MouseButton;

/// Identifier of a registered listener, unique within its document.
pub type ListenerId = u64;

type PointerHandler = Arc<dyn Fn(&PointerDown) + Send + Sync>;

/// A mouse button press, resolved against the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerDown {
    /// Deepest element under the pointer, None when nothing was hit.
    pub target: Option<String>,
    /// IDs from the tree root down to `target`. Empty when nothing was hit.
    pub path: Vec<String>,
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
}

impl PointerDown {
    /// Build a pointer-down for `target` in `root`, resolving its ancestor path.
    ///
    /// A target that is not part of `root` yields an empty path, so every
    /// element treats the press as outside itself.
    pub fn resolve(root: &Element, target: Option<&str>, x: u16, y: u16, button: MouseButton) -> Self {
        let path = target
            .and_then(|id| element_path(root, id))
            .unwrap_or_default();
        Self {
            target: target.map(str::to_string),
            path,
            x,
            y,
            button,
        }
    }

    /// Whether the press landed on the element `id` or one of its descendants.
    pub fn is_within(&self, id: &str) -> bool {
        self.path.iter().any(|p| p == id)
    }
}

#[derive(Default)]
struct Listeners {
    next_id: ListenerId,
    pointer_down: Vec<(ListenerId, PointerHandler)>,
}

/// Registry of document-level listeners.
///
/// Cloning a `Document` yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct Document {
    listeners: Arc<RwLock<Listeners>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("pointer_down_listeners", &self.listener_count())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every pointer-down on the document.
    ///
    /// The listener stays registered until the returned guard is dropped.
    pub fn on_pointer_down<F>(&self, handler: F) -> ListenerGuard
    where
        F: Fn(&PointerDown) + Send + Sync + 'static,
    {
        let id = match self.listeners.write() {
            Ok(mut guard) => {
                let id = guard.next_id;
                guard.next_id += 1;
                guard.pointer_down.push((id, Arc::new(handler)));
                id
            }
            Err(_) => {
                log::warn!("[document] listener registry poisoned, listener dropped");
                ListenerId::MAX
            }
        };
        log::trace!("[document] pointer-down listener {id} added");

        ListenerGuard {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Number of live pointer-down listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .map(|guard| guard.pointer_down.len())
            .unwrap_or(0)
    }

    /// Deliver a pointer-down to every listener, in registration order.
    pub fn dispatch_pointer_down(&self, event: &PointerDown) {
        // Snapshot so handlers may add or drop listeners while running
        let handlers: Vec<PointerHandler> = match self.listeners.read() {
            Ok(guard) => guard
                .pointer_down
                .iter()
                .map(|(_, handler)| Arc::clone(handler))
                .collect(),
            Err(_) => return,
        };

        log::trace!(
            "[document] pointer-down target={:?} -> {} listener(s)",
            event.target,
            handlers.len()
        );

        for handler in handlers {
            handler(event);
        }
    }
}

/// Keeps a document listener registered. Dropping it unsubscribes.
#[must_use = "dropping the guard immediately removes the listener"]
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    listeners: Weak<RwLock<Listeners>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let Ok(mut guard) = listeners.write() else {
            return;
        };
        guard.pointer_down.retain(|(id, _)| *id != self.id);
        log::trace!("[document] pointer-down listener {} removed", self.id);
    }
}
