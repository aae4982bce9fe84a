//! Searchable dropdown select widget rendered onto a `tuidom` element tree.
//!
//! A [`DropdownSelect`] owns its selection, open flag and filter text. The
//! host renders it with [`DropdownSelect::element`], forwards clicks and keys
//! through [`DropdownSelect::dispatch`], and mounts it on a
//! [`tuidom::Document`] so presses outside the widget close the list.

mod config;
mod events;
mod filter;
mod mount;
mod option;
mod render;
mod state;

pub use config::{FilterReset, OnSelect, SelectConfig};
pub use events::EventResult;
pub use filter::{FilterMatch, substring_filter};
pub use mount::Mounted;
pub use option::{SelectItem, SelectOption};
pub use render::NO_OPTIONS_LABEL;
pub use state::{DropdownSelect, SelectId};
