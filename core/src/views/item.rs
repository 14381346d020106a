//! One list row composed of its text and the edit and delete actions.

use crate::store::TodoStore;
use crate::views::{DeleteView, UpdateView};

/// One row: the item's text with its edit and delete actions side by side.
pub struct ItemView<T> {
    id: String,
    text: String,
    pub update: UpdateView<T>,
    pub delete: DeleteView<T>,
}

impl<T> ItemView<T> {
    pub fn new(store: TodoStore<T>, id: impl Into<String>, text: impl Into<String>) -> Self {
        let id = id.into();
        let text = text.into();
        Self {
            update: UpdateView::new(store.clone(), id.clone(), text.clone()),
            delete: DeleteView::new(store, id.clone()),
            id,
            text,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
        }
        self.update.set_item(text);
    }
}
