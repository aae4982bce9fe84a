//! Attaching a dropdown to a document.

use std::ops::Deref;

use tuidom::{Document, ListenerGuard};

use crate::state::DropdownSelect;

/// A dropdown that is live on a document.
///
/// While this value exists, any pointer-down outside the widget's root
/// element closes its list. Dropping it (or calling [`Mounted::unmount`])
/// removes the document listener.
#[derive(Debug)]
pub struct Mounted {
    select: DropdownSelect,
    listener: ListenerGuard,
}

impl DropdownSelect {
    /// Register this widget's outside-press listener on `document`.
    pub fn mount(&self, document: &Document) -> Mounted {
        let handle = self.clone();
        let listener = document.on_pointer_down(move |event| handle.on_pointer_down(event));
        log::debug!("[pickbox] {} mounted (listener {})", self.id(), listener.id());

        Mounted {
            select: self.clone(),
            listener,
        }
    }
}

impl Mounted {
    pub fn widget(&self) -> &DropdownSelect {
        &self.select
    }

    /// Remove the document listener and hand the widget back.
    pub fn unmount(self) -> DropdownSelect {
        let Mounted { select, listener } = self;
        log::debug!("[pickbox] {} unmounted (listener {})", select.id(), listener.id());
        drop(listener);
        select
    }
}

impl Deref for Mounted {
    type Target = DropdownSelect;

    fn deref(&self) -> &Self::Target {
        &self.select
    }
}
