//! Headless view models for the todo screen.
//!
//! # Overview
//! The screen is a `RootView` holding one `AddView` and one `ItemView` per
//! todo; each `ItemView` owns an `UpdateView` (edit dialog) and a
//! `DeleteView`. Every view receives the same `TodoStore` handle, which
//! stands in for an ambient context: views read the list from it and call
//! its refresh after each mutation.
//!
//! Views never draw anything. `RootView::render` produces a `Frame`, plain
//! data that a rendering toolkit turns into widgets.

mod add;
mod delete;
mod frame;
mod item;
mod root;
mod update;

pub use add::AddView;
pub use delete::DeleteView;
pub use frame::{AddFrame, Frame, ItemFrame};
pub use item::ItemView;
pub use root::RootView;
pub use update::{DialogState, UpdateView};
