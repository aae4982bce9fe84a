//! Dropdown widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::{FilterReset, OnSelect, SelectConfig};
use crate::filter::substring_filter;
use crate::option::SelectOption;

/// Unique identifier for a DropdownSelect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__pickbox_{}", self.0)
    }
}

/// Internal state for a DropdownSelect.
#[derive(Default)]
struct SelectInner {
    options: Vec<SelectOption>,
    /// Currently selected value (None if nothing selected)
    selected: Option<String>,
    /// Text typed into the trigger
    filter: String,
    placeholder: String,
    custom_classes: Vec<String>,
    filter_reset: FilterReset,
    on_select: Option<OnSelect>,
}

/// A searchable dropdown select.
///
/// The trigger row doubles as a filter box: typed text narrows the option
/// list by case-insensitive substring match on option names, while the
/// selected option's name (or the placeholder) shows through as the input's
/// placeholder.
///
/// Handles are cheap to clone and share state, so a document listener and
/// the host can hold the same widget.
///
/// # Example
///
/// ```
/// use pickbox::{DropdownSelect, SelectConfig};
///
/// let select = DropdownSelect::new(
///     SelectConfig::new()
///         .options([("a", "Apple"), ("b", "Banana")])
///         .selected("b")
///         .placeholder("Pick a fruit"),
/// );
///
/// assert_eq!(select.display_label(), "Banana");
/// select.filter("app");
/// assert_eq!(select.filtered_options().len(), 1);
/// ```
pub struct DropdownSelect {
    /// Unique identifier for this select instance
    id: SelectId,
    /// Internal state
    inner: Arc<RwLock<SelectInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Whether the option list is open
    is_open: Arc<AtomicBool>,
}

impl DropdownSelect {
    /// Create a dropdown from its configuration. Starts closed with an empty filter.
    pub fn new(config: SelectConfig) -> Self {
        let custom_classes = config.class_tokens();
        let SelectConfig {
            options,
            selected,
            on_select,
            placeholder,
            filter_reset,
            ..
        } = config;

        Self {
            id: SelectId::new(),
            inner: Arc::new(RwLock::new(SelectInner {
                options,
                selected,
                filter: String::new(),
                placeholder,
                custom_classes,
                filter_reset,
                on_select,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            is_open: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string. This is also the root element's ID.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    pub fn options(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Replace the option set. Clears the filter so the new set shows in full.
    pub fn set_options(&self, options: Vec<SelectOption>) {
        if let Ok(mut guard) = self.inner.write() {
            log::debug!("[pickbox] {} options replaced ({})", self.id, options.len());
            guard.options = options;
            guard.filter.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Options whose name contains the filter text, in original order.
    pub fn filtered_options(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|guard| filtered(&guard.options, &guard.filter))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// Get the currently selected value.
    pub fn selected(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or(None)
    }

    /// Set the selected value without notifying the callback.
    pub fn set_selected(&self, value: Option<String>) {
        if let Ok(mut guard) = self.inner.write()
            && guard.selected != value
        {
            guard.selected = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Choose `value`: record it, close the list and notify the callback.
    ///
    /// The value is not checked against the options. An unknown value simply
    /// leaves the trigger showing the placeholder.
    pub fn select(&self, value: &str) {
        let callback = match self.inner.write() {
            Ok(mut guard) => {
                guard.selected = Some(value.to_string());
                if guard.filter_reset != FilterReset::Never {
                    guard.filter.clear();
                }
                guard.on_select.clone()
            }
            Err(_) => return,
        };
        self.dirty.store(true, Ordering::SeqCst);
        self.close();

        log::debug!("[pickbox] {} selected {value:?}", self.id);

        // Called without the lock held so the callback may use this widget
        if let Some(callback) = callback {
            callback(value);
        }
    }

    /// Name of the selected option, or the placeholder when nothing matches.
    pub fn display_label(&self) -> String {
        self.inner
            .read()
            .map(|guard| label_for(&guard))
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    pub fn filter_text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.filter.clone())
            .unwrap_or_default()
    }

    /// Replace the filter text.
    pub fn filter(&self, text: impl Into<String>) {
        let text = text.into();
        if let Ok(mut guard) = self.inner.write()
            && guard.filter != text
        {
            log::trace!("[pickbox] {} filter {text:?}", self.id);
            guard.filter = text;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub(crate) fn edit_filter(&self, edit: impl FnOnce(&mut String)) {
        let mut text = self.filter_text();
        edit(&mut text);
        self.filter(text);
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the option list is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Open the option list.
    pub fn open(&self) {
        if !self.is_open.swap(true, Ordering::SeqCst) {
            log::trace!("[pickbox] {} opened", self.id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Close the option list.
    pub fn close(&self) {
        if self.is_open.swap(false, Ordering::SeqCst) {
            log::trace!("[pickbox] {} closed", self.id);
            if let Ok(mut guard) = self.inner.write()
                && guard.filter_reset == FilterReset::OnClose
            {
                guard.filter.clear();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle the option list open/closed.
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    // -------------------------------------------------------------------------
    // Styling
    // -------------------------------------------------------------------------

    /// Root class tokens: the widget class, then custom tokens, then
    /// `options-open` while the list is shown.
    pub fn class_list(&self) -> Vec<String> {
        let mut classes = vec!["pickbox".to_string()];
        if let Ok(guard) = self.inner.read() {
            classes.extend(guard.custom_classes.iter().cloned());
        }
        if self.is_open() {
            classes.push("options-open".to_string());
        }
        classes
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the select state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Rendering support
    // -------------------------------------------------------------------------

    /// Consistent copy of everything the renderer reads.
    pub(crate) fn snapshot(&self) -> Snapshot {
        let is_open = self.is_open();
        self.inner
            .read()
            .map(|guard| Snapshot {
                selected: guard.selected.clone(),
                filter: guard.filter.clone(),
                label: label_for(&guard),
                has_selection: selected_option(&guard).is_some(),
                filtered: filtered(&guard.options, &guard.filter),
                is_open,
            })
            .unwrap_or_else(|_| Snapshot {
                is_open,
                ..Snapshot::default()
            })
    }
}

/// Point-in-time view of the widget used to build its element tree.
#[derive(Debug, Default)]
pub(crate) struct Snapshot {
    pub selected: Option<String>,
    pub filter: String,
    pub label: String,
    /// The selection names a known option.
    pub has_selection: bool,
    pub filtered: Vec<SelectOption>,
    pub is_open: bool,
}

fn filtered(options: &[SelectOption], filter: &str) -> Vec<SelectOption> {
    let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
    substring_filter(filter, &names)
        .into_iter()
        .map(|m| options[m.index].clone())
        .collect()
}

fn selected_option(inner: &SelectInner) -> Option<&SelectOption> {
    let selected = inner.selected.as_deref()?;
    inner.options.iter().find(|o| o.value == selected)
}

fn label_for(inner: &SelectInner) -> String {
    selected_option(inner)
        .map(|o| o.name.clone())
        .unwrap_or_else(|| inner.placeholder.clone())
}

impl Clone for DropdownSelect {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            is_open: Arc::clone(&self.is_open),
        }
    }
}

impl Default for DropdownSelect {
    fn default() -> Self {
        Self::new(SelectConfig::default())
    }
}

impl std::fmt::Debug for DropdownSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownSelect")
            .field("id", &self.id)
            .field("selected", &self.selected())
            .field("filter", &self.filter_text())
            .field("is_open", &self.is_open())
            .finish()
    }
}
