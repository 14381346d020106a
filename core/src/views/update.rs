//! Edit dialog for one row.
//!
//! # Design
//! A two-state machine, `Closed` and `Open { draft }`. The draft exists only
//! while the dialog is open and is seeded from the row's text on each open.
//! A successful save closes the dialog. A failed one keeps it open.

use crate::error::ApiError;
use crate::store::TodoStore;
use crate::transport::Transport;
use crate::types::EditTodo;

/// Visibility of the edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open { draft: String },
}

/// Edit action for one todo, backed by a modal dialog.
///
/// Opening the dialog seeds the draft from the item's current text, so a
/// draft abandoned with `cancel` never resurfaces.
pub struct UpdateView<T> {
    store: TodoStore<T>,
    id: String,
    item: String,
    state: DialogState,
}

impl<T> UpdateView<T> {
    pub fn new(store: TodoStore<T>, id: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            store,
            id: id.into(),
            item: item.into(),
            state: DialogState::Closed,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            DialogState::Open { draft } => Some(draft),
            DialogState::Closed => None,
        }
    }

    pub fn open(&mut self) {
        self.state = DialogState::Open {
            draft: self.item.clone(),
        };
    }

    /// Replace the draft text. Ignored while the dialog is closed.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let DialogState::Open { draft } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Discard the draft and close. Sends nothing.
    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    /// New text for the item from a refetched list. An open draft is left
    /// untouched.
    pub(crate) fn set_item(&mut self, item: &str) {
        if self.item != item {
            self.item = item.to_string();
        }
    }
}

impl<T: Transport> UpdateView<T> {
    /// PUT the draft, refetch, and close the dialog.
    ///
    /// The dialog stays open with its draft if either request fails. Saving
    /// a closed dialog sends nothing.
    pub async fn save(&mut self) -> Result<(), ApiError> {
        let DialogState::Open { draft } = &self.state else {
            tracing::debug!(id = %self.id, "save ignored, dialog is closed");
            return Ok(());
        };
        let edit = EditTodo {
            item: draft.clone(),
        };
        tracing::debug!(id = %self.id, "saving todo");
        self.store
            .mutate(|client| client.build_update_todo(&self.id, &edit))
            .await?;
        self.state = DialogState::Closed;
        Ok(())
    }
}
