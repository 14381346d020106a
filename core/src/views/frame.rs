//! Plain-data render tree handed to whatever draws the screen.

use crate::views::DialogState;

/// One rendered screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub add: AddFrame,
    pub items: Vec<ItemFrame>,
}

/// The add form's single-line text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFrame {
    pub text: String,
}

/// One list row, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFrame {
    pub id: String,
    pub text: String,
    pub dialog: DialogState,
}
