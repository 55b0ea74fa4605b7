//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! The wire field is `text` and the update payload is the full `Item`: the
//! service replaces both `text` and `completed` on every PUT.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API. `id` is always service-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. Carries no id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewItem {
    pub fn pending(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}
