//! The add form.
//!
//! # Design
//! Holds the uncommitted text locally. Submitting posts it, refetches the
//! whole list through the shared store, and only then clears the field, so
//! a failed submit leaves the text in place for another try.

use crate::error::ApiError;
use crate::store::TodoStore;
use crate::transport::Transport;
use crate::types::NewTodo;

/// Free-text input that creates a todo on submit.
pub struct AddView<T> {
    store: TodoStore<T>,
    text: String,
}

impl<T> AddView<T> {
    pub fn new(store: TodoStore<T>) -> Self {
        Self {
            store,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl<T: Transport> AddView<T> {
    /// POST the current text, refetch the list, then clear the field.
    ///
    /// The id sent is `len + 1` of the list as currently rendered. It is only
    /// a guess; the refetched list carries whatever id the backend chose.
    /// Empty text is sent as-is. On failure the field keeps its text.
    pub async fn submit(&mut self) -> Result<(), ApiError> {
        let candidate = NewTodo {
            id: (self.store.len() + 1).to_string(),
            item: self.text.clone(),
        };
        tracing::debug!(id = %candidate.id, "submitting new todo");
        self.store
            .mutate(|client| client.build_create_todo(&candidate))
            .await?;
        self.text.clear();
        Ok(())
    }
}
