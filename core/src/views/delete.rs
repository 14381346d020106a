//! Per-row delete action.

use crate::error::ApiError;
use crate::store::TodoStore;
use crate::transport::Transport;

/// Single trigger that deletes one todo. No confirmation step.
pub struct DeleteView<T> {
    store: TodoStore<T>,
    id: String,
}

impl<T> DeleteView<T> {
    pub fn new(store: TodoStore<T>, id: impl Into<String>) -> Self {
        Self {
            store,
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl<T: Transport> DeleteView<T> {
    /// DELETE the todo, then refetch. The row stays in the list until the
    /// refetch replaces it.
    pub async fn activate(&self) -> Result<(), ApiError> {
        tracing::debug!(id = %self.id, "deleting todo");
        self.store
            .mutate(|client| client.build_delete_todo(&self.id))
            .await
    }
}
