//! Draws a `Frame` as plain text.

use std::fmt::Write;

use todo_core::{DialogState, Frame};

pub fn render(frame: &Frame) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "add> {}", frame.add.text);
    if frame.items.is_empty() {
        out.push_str("  (no todos)\n");
    }
    for (index, item) in frame.items.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, item.text);
        if let DialogState::Open { draft } = &item.dialog {
            let _ = writeln!(out, "     [update todo] {draft}_  (save | cancel)");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::views::{AddFrame, ItemFrame};

    fn item(id: &str, text: &str, dialog: DialogState) -> ItemFrame {
        ItemFrame {
            id: id.to_string(),
            text: text.to_string(),
            dialog,
        }
    }

    #[test]
    fn empty_list_says_so() {
        let frame = Frame {
            add: AddFrame { text: String::new() },
            items: Vec::new(),
        };
        assert_eq!(render(&frame), "add> \n  (no todos)\n");
    }

    #[test]
    fn rows_are_numbered_and_open_dialog_shows_draft() {
        let frame = Frame {
            add: AddFrame {
                text: "half".to_string(),
            },
            items: vec![
                item("1", "Sample todo", DialogState::Closed),
                item(
                    "4",
                    "buy milk",
                    DialogState::Open {
                        draft: "buy oat milk".to_string(),
                    },
                ),
            ],
        };
        assert_eq!(
            render(&frame),
            "add> half\n  1. Sample todo\n  2. buy milk\n     [update todo] buy oat milk_  (save | cancel)\n"
        );
    }
}
