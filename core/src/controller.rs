//! View Controller: owns the list, the edit state and the loading gate.
//!
//! # Design
//! Each user action maps to one method. Guards are checked before any remote
//! call is issued; a violated guard yields `Outcome::Rejected` and leaves
//! state untouched. Mutating calls hold the `LoadingGate` for their whole
//! duration, so a second mutation cannot start until the first completes.
//! Local state changes only after the service confirms the mutation.

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::TransportError;
use crate::gate::LoadingGate;
use crate::remote::RemoteClient;
use crate::transport::Transport;
use crate::types::Item;
use crate::view::{Controls, ItemView, View};

/// Only one item is editable at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { id: i64, draft: String },
}

impl EditState {
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            EditState::Viewing => None,
            EditState::Editing { id, .. } => Some(*id),
        }
    }
}

/// Why an action was refused without contacting the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("another request is in flight")]
    Busy,
    #[error("todo text must not be blank")]
    BlankText,
    #[error("draft is unchanged")]
    UnchangedDraft,
    #[error("no todo is being edited")]
    NotEditing,
    #[error("todo {0} is not in the list")]
    UnknownItem(i64),
    #[error("todo {0} is being edited")]
    ItemBeingEdited(i64),
}

/// Result of a controller action.
#[derive(Debug)]
pub enum Outcome {
    /// The action completed and local state reflects it.
    Applied,
    /// A guard refused the action; no remote call was made.
    Rejected(Rejection),
    /// The remote call failed; local state is the last known-good view.
    Failed(TransportError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(rejection: Rejection) -> Self {
        Outcome::Rejected(rejection)
    }
}

pub struct ViewController<T> {
    remote: RemoteClient<T>,
    items: Vec<Item>,
    new_text: String,
    edit: EditState,
    gate: LoadingGate,
}

impl<T: Transport> ViewController<T> {
    pub fn new(remote: RemoteClient<T>) -> Self {
        Self {
            remote,
            items: Vec::new(),
            new_text: String::new(),
            edit: EditState::Viewing,
            gate: LoadingGate::new(),
        }
    }

    pub fn remote(&self) -> &RemoteClient<T> {
        &self.remote
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    /// A handle for observers (spinners, progress output) of the loading flag.
    pub fn loading_gate(&self) -> LoadingGate {
        self.gate.clone()
    }

    /// Replace the collection with the service's current list.
    pub async fn load(&mut self) -> Outcome {
        let Some(_loading) = self.gate.try_acquire() else {
            return Rejection::Busy.into();
        };
        match self.remote.list_items().await {
            Ok(items) => {
                debug!(count = items.len(), "todos loaded");
                self.items = items;
                if let Some(id) = self.edit.editing_id() {
                    if self.find(id).is_none() {
                        debug!(id, "edited todo is gone, dropping draft");
                        self.edit = EditState::Viewing;
                    }
                }
                Outcome::Applied
            }
            Err(err) => failed("load", err),
        }
    }

    /// Update the "new todo" input buffer.
    pub fn set_new_text(&mut self, text: impl Into<String>) -> Outcome {
        if self.is_loading() {
            return Rejection::Busy.into();
        }
        self.new_text = text.into();
        Outcome::Applied
    }

    /// Create an item from the input buffer and append it.
    pub async fn add(&mut self) -> Outcome {
        let Some(_loading) = self.gate.try_acquire() else {
            return Rejection::Busy.into();
        };
        if is_blank(&self.new_text) {
            return Rejection::BlankText.into();
        }
        match self.remote.create_item(&self.new_text, false).await {
            Ok(item) => {
                debug!(id = item.id, "todo created");
                self.items.push(item);
                self.new_text.clear();
                Outcome::Applied
            }
            Err(err) => failed("create", err),
        }
    }

    /// Flip `completed`, preserving `text`.
    pub async fn toggle(&mut self, id: i64) -> Outcome {
        let Some(_loading) = self.gate.try_acquire() else {
            return Rejection::Busy.into();
        };
        let item = match self.actionable(id) {
            Ok(item) => item,
            Err(rejection) => return rejection.into(),
        };
        let (text, completed) = (item.text.clone(), !item.completed);
        match self.remote.update_item(id, &text, completed).await {
            Ok(updated) => {
                self.replace(id, updated);
                Outcome::Applied
            }
            Err(err) => failed("toggle", err),
        }
    }

    /// Enter `Editing` with the draft set to the item's current text.
    ///
    /// Starting an edit while another item is being edited switches to the
    /// new item and discards the old draft.
    pub fn start_edit(&mut self, id: i64) -> Outcome {
        if self.is_loading() {
            return Rejection::Busy.into();
        }
        let Some(draft) = self.find(id).map(|item| item.text.clone()) else {
            return Rejection::UnknownItem(id).into();
        };
        self.edit = EditState::Editing { id, draft };
        Outcome::Applied
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> Outcome {
        if self.is_loading() {
            return Rejection::Busy.into();
        }
        match &mut self.edit {
            EditState::Editing { draft, .. } => {
                *draft = text.into();
                Outcome::Applied
            }
            EditState::Viewing => Rejection::NotEditing.into(),
        }
    }

    /// Leave `Editing` without contacting the service.
    pub fn cancel_edit(&mut self) -> Outcome {
        if self.is_loading() {
            return Rejection::Busy.into();
        }
        if self.edit == EditState::Viewing {
            return Rejection::NotEditing.into();
        }
        self.edit = EditState::Viewing;
        Outcome::Applied
    }

    /// Persist the draft. On failure the controller stays in `Editing` with
    /// the draft intact.
    pub async fn save_edit(&mut self) -> Outcome {
        let Some(_loading) = self.gate.try_acquire() else {
            return Rejection::Busy.into();
        };
        let (id, text, completed) = match self.savable_edit() {
            Ok((item, draft)) => (item.id, draft.to_string(), item.completed),
            Err(rejection) => return rejection.into(),
        };
        match self.remote.update_item(id, &text, completed).await {
            Ok(updated) => {
                self.replace(id, updated);
                self.edit = EditState::Viewing;
                Outcome::Applied
            }
            Err(err) => failed("save edit", err),
        }
    }

    pub async fn delete(&mut self, id: i64) -> Outcome {
        let Some(_loading) = self.gate.try_acquire() else {
            return Rejection::Busy.into();
        };
        if let Err(rejection) = self.actionable(id) {
            return rejection.into();
        }
        match self.remote.delete_item(id).await {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                Outcome::Applied
            }
            Err(err) => failed("delete", err),
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> View {
        let loading = self.is_loading();
        let editing = self.edit.editing_id();
        let items = self
            .items
            .iter()
            .map(|item| {
                let draft = match &self.edit {
                    EditState::Editing { id, draft } if *id == item.id => Some(draft.as_str()),
                    _ => None,
                };
                ItemView::new(item, draft)
            })
            .collect();

        let idle = !loading;
        View {
            items,
            new_text: self.new_text.clone(),
            loading,
            controls: Controls {
                input: idle,
                add: idle && !is_blank(&self.new_text),
                save: idle && self.savable_edit().is_ok(),
                cancel: idle && editing.is_some(),
                item_actions: idle,
            },
        }
    }

    fn find(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Rows being edited show save/cancel instead of toggle/delete.
    fn actionable(&self, id: i64) -> Result<&Item, Rejection> {
        if self.edit.editing_id() == Some(id) {
            return Err(Rejection::ItemBeingEdited(id));
        }
        self.find(id).ok_or(Rejection::UnknownItem(id))
    }

    fn savable_edit(&self) -> Result<(&Item, &str), Rejection> {
        let EditState::Editing { id, draft } = &self.edit else {
            return Err(Rejection::NotEditing);
        };
        let item = self.find(*id).ok_or(Rejection::UnknownItem(*id))?;
        if is_blank(draft) {
            return Err(Rejection::BlankText);
        }
        if *draft == item.text {
            return Err(Rejection::UnchangedDraft);
        }
        Ok((item, draft))
    }

    fn replace(&mut self, id: i64, updated: Item) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id == id) {
            *slot = updated;
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn failed(action: &'static str, err: TransportError) -> Outcome {
    warn!(action, error = %err, "todo action aborted, keeping last known state");
    Outcome::Failed(err)
}
