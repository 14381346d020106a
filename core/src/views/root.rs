//! Root of the screen.
//!
//! # Design
//! Owns the add form and the row views, and mounts the list once. Row views
//! are rebuilt lazily: every accessor first compares the store's revision
//! with the last one it reconciled against.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::store::TodoStore;
use crate::transport::Transport;
use crate::views::{AddFrame, AddView, Frame, ItemFrame, ItemView};

/// Top of the screen: owns the add form and one `ItemView` per todo.
///
/// Item views are keyed by id. When the store's list is replaced, views for
/// surviving ids are kept (so an open edit dialog survives a refetch
/// triggered elsewhere), new ids get fresh views, and vanished ids are
/// dropped. Row order always follows the store.
pub struct RootView<T> {
    store: TodoStore<T>,
    add: AddView<T>,
    items: Vec<ItemView<T>>,
    synced_revision: u64,
    mounted: bool,
}

impl<T> RootView<T> {
    pub fn new(store: TodoStore<T>) -> Self {
        Self {
            add: AddView::new(store.clone()),
            store,
            items: Vec::new(),
            synced_revision: 0,
            mounted: false,
        }
    }

    pub fn store(&self) -> &TodoStore<T> {
        &self.store
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn add_view(&mut self) -> &mut AddView<T> {
        &mut self.add
    }

    pub fn items(&mut self) -> &[ItemView<T>] {
        self.reconcile();
        &self.items
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut ItemView<T>> {
        self.reconcile();
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Row at `index` in rendering order.
    pub fn item_at_mut(&mut self, index: usize) -> Option<&mut ItemView<T>> {
        self.reconcile();
        self.items.get_mut(index)
    }

    pub fn render(&mut self) -> Frame {
        self.reconcile();
        Frame {
            add: AddFrame {
                text: self.add.text().to_string(),
            },
            items: self
                .items
                .iter()
                .map(|item| ItemFrame {
                    id: item.id().to_string(),
                    text: item.text().to_string(),
                    dialog: item.update.state().clone(),
                })
                .collect(),
        }
    }

    fn reconcile(&mut self) {
        let revision = self.store.revision();
        if revision == self.synced_revision {
            return;
        }
        let mut previous: HashMap<String, ItemView<T>> = self
            .items
            .drain(..)
            .map(|item| (item.id().to_string(), item))
            .collect();
        self.items = self
            .store
            .todos()
            .into_iter()
            .map(|todo| match previous.remove(&todo.id) {
                Some(mut view) => {
                    view.set_text(&todo.item);
                    view
                }
                None => ItemView::new(self.store.clone(), todo.id, todo.item),
            })
            .collect();
        self.synced_revision = revision;
    }
}

impl<T: Transport> RootView<T> {
    /// Load the list the first time the view is shown. Later calls do
    /// nothing, even if the first load failed.
    pub async fn mount(&mut self) -> Result<(), ApiError> {
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;
        tracing::debug!("mounting root view");
        self.store.fetch_todos().await
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        self.store.fetch_todos().await
    }
}
