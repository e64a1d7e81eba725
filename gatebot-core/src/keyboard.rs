//! Inline keyboard model: rows of buttons, each carrying a label and a callback payload.

use serde::{Deserialize, Serialize};

/// One inline button. Pressing it produces a callback update whose data is `callback_data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Inline keyboard attached to a message. Rows render top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self { rows }
    }

    /// One button per row.
    pub fn single_column(buttons: impl IntoIterator<Item = InlineButton>) -> Self {
        Self {
            rows: buttons.into_iter().map(|b| vec![b]).collect(),
        }
    }

    /// All buttons in row order.
    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.rows.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column_puts_each_button_on_its_own_row() {
        let kb = InlineKeyboard::single_column([
            InlineButton::callback("A", "a"),
            InlineButton::callback("B", "b"),
        ]);
        assert_eq!(kb.rows.len(), 2);
        assert_eq!(kb.len(), 2);
        let labels: Vec<&str> = kb.buttons().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_keyboard() {
        let kb = InlineKeyboard::default();
        assert!(kb.is_empty());
        assert_eq!(kb.buttons().count(), 0);
    }
}
