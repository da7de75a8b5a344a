//! Board Context
//!
//! The note store, shared with components via Leptos Context API.

use leptos::prelude::*;

use crate::board::{partition, Partition};
use crate::models::NoteColor;
use crate::storage::BoardStorage;
use crate::store::NoteStore;

/// Board-wide handle provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Authoritative note collection
    store: RwSignal<NoteStore<BoardStorage>>,
    /// Whether notes survive a reload
    pub durable: bool,
}

impl BoardContext {
    pub fn new(store: NoteStore<BoardStorage>, durable: bool) -> Self {
        Self {
            store: RwSignal::new(store),
            durable,
        }
    }

    /// Active and completed notes, re-derived on every store change
    pub fn partition(&self) -> Partition {
        self.store.with(|store| partition(store.notes()))
    }

    /// Last save failure, if the most recent write did not go through
    pub fn save_error(&self) -> Option<String> {
        self.store.with(|store| store.last_error().map(|e| e.to_string()))
    }

    /// Add a note to the front of the board
    pub fn add(&self, content: &str, color: NoteColor) {
        self.store.update(|store| {
            store.add(content, color);
        });
    }

    /// Complete an active note or restore a completed one
    pub fn toggle_complete(&self, id: &str) {
        self.store.update(|store| {
            store.toggle_complete(id);
        });
    }

    /// Permanently delete a note
    pub fn delete(&self, id: &str) {
        self.store.update(|store| {
            store.delete(id);
        });
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
