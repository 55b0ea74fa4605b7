//! Render-ready snapshot of the controller state.
//!
//! Front ends draw a `View` and consult `Controls` to decide which
//! affordances are enabled; they never read controller internals.

use crate::types::Item;

/// One row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    /// The in-progress draft when this row is being edited.
    pub draft: Option<String>,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            text: item.text,
            completed: item.completed,
            draft: None,
        }
    }
}

impl ItemView {
    pub(crate) fn new(item: &Item, draft: Option<&str>) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
            completed: item.completed,
            draft: draft.map(str::to_string),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }
}

/// Which mutating affordances are currently enabled.
///
/// Every field is `false` while a call is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// The "new todo" input field and the draft field of the edited row.
    pub input: bool,
    /// The add button: additionally requires non-blank input.
    pub add: bool,
    /// The save button of the edited row: requires a non-blank, changed draft.
    pub save: bool,
    /// The cancel button of the edited row.
    pub cancel: bool,
    /// Toggle, edit and delete on rows that are not being edited.
    pub item_actions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub items: Vec<ItemView>,
    pub new_text: String,
    pub loading: bool,
    pub controls: Controls,
}

impl View {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn editing(&self) -> Option<&ItemView> {
        self.items.iter().find(|row| row.is_editing())
    }
}
