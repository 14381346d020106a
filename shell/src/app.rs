//! Applies commands to the root view.

use thiserror::Error;
use todo_core::{ApiError, RootView, Transport};

use crate::command::{Command, HELP};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no row {0}")]
    NoSuchRow(usize),

    #[error("no edit dialog is open (use `open <n>`)")]
    NoOpenDialog,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Print(&'static str),
    Quit,
}

pub struct Shell<T> {
    root: RootView<T>,
}

impl<T: Transport> Shell<T> {
    pub fn new(root: RootView<T>) -> Self {
        Self { root }
    }

    pub fn root(&mut self) -> &mut RootView<T> {
        &mut self.root
    }

    pub async fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        match command {
            Command::List => {}
            Command::Add(text) => {
                let add = self.root.add_view();
                add.set_text(text);
                add.submit().await?;
            }
            Command::Open(n) => {
                self.check_row(n)?;
                self.close_dialogs();
                self.row(n)?.update.open();
            }
            Command::Draft(text) => self.open_row()?.update.set_draft(text),
            Command::Save => self.open_row()?.update.save().await?,
            Command::Cancel => self.open_row()?.update.cancel(),
            Command::Edit(n, text) => {
                self.check_row(n)?;
                self.close_dialogs();
                let update = &mut self.row(n)?.update;
                update.open();
                update.set_draft(text);
                update.save().await?;
            }
            Command::Delete(n) => self.row(n)?.delete.activate().await?,
            Command::Refresh => self.root.refresh().await?,
            Command::Help => return Ok(Flow::Print(HELP)),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Redraw)
    }

    /// Row `n`, counted from 1 as displayed.
    fn row(&mut self, n: usize) -> Result<&mut todo_core::views::ItemView<T>, ShellError> {
        n.checked_sub(1)
            .and_then(|index| self.root.item_at_mut(index))
            .ok_or(ShellError::NoSuchRow(n))
    }

    fn check_row(&mut self, n: usize) -> Result<(), ShellError> {
        self.row(n).map(|_| ())
    }

    fn open_row(&mut self) -> Result<&mut todo_core::views::ItemView<T>, ShellError> {
        let id = self
            .root
            .items()
            .iter()
            .find(|item| item.update.is_open())
            .map(|item| item.id().to_string())
            .ok_or(ShellError::NoOpenDialog)?;
        self.root.item_mut(&id).ok_or(ShellError::NoOpenDialog)
    }

    /// The terminal shows one dialog at a time.
    fn close_dialogs(&mut self) {
        let open: Vec<String> = self
            .root
            .items()
            .iter()
            .filter(|item| item.update.is_open())
            .map(|item| item.id().to_string())
            .collect();
        for id in open {
            if let Some(item) = self.root.item_mut(&id) {
                item.update.cancel();
            }
        }
    }
}
