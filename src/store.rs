//! Note Store
//!
//! Owns the board's notes and keeps the storage slot in sync. Every
//! mutation that changes the collection writes the whole collection back
//! before returning.

use crate::models::{Note, NoteColor};
use crate::storage::{NoteStorage, StorageError, StorageResult};
use crate::utils::{generate_id, now_millis, random_rotation};

/// Ordered note collection, newest first, backed by a storage slot
#[derive(Debug)]
pub struct NoteStore<S: NoteStorage> {
    notes: Vec<Note>,
    storage: S,
    key: String,
    last_error: Option<StorageError>,
}

impl<S: NoteStorage> NoteStore<S> {
    /// Load the collection stored under `key`.
    ///
    /// A missing or empty slot gives an empty board. An unreadable or malformed slot
    /// is logged and also gives an empty board; nothing is written until
    /// the first mutation.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let notes = match Self::read_notes(&storage, &key) {
            Ok(Some(notes)) => {
                log::info!("Loaded {} notes from {:?}", notes.len(), key);
                notes
            }
            Ok(None) => {
                log::debug!("No saved notes under {:?}, starting empty", key);
                Vec::new()
            }
            Err(e) => {
                log::error!("Failed to load notes, starting empty: {}", e);
                Vec::new()
            }
        };
        Self {
            notes,
            storage,
            key,
            last_error: None,
        }
    }

    fn read_notes(storage: &S, key: &str) -> StorageResult<Option<Vec<Note>>> {
        match storage.read(key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// All notes in board order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Error from the most recent write, cleared by the next successful one
    pub fn last_error(&self) -> Option<&StorageError> {
        self.last_error.as_ref()
    }

    /// Add a note at the front of the board.
    ///
    /// Returns `None` and changes nothing when `content` is blank.
    pub fn add(&mut self, content: &str, color: NoteColor) -> Option<&Note> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        let note = Note::new(self.fresh_id(), content.to_string(), color, now_millis(), random_rotation());
        log::debug!("Adding note {}", note.id);
        self.notes.insert(0, note);
        self.persist();
        self.notes.first()
    }

    /// Flip completion of the note with `id`, returning its new state.
    ///
    /// Unknown ids are ignored.
    pub fn toggle_complete(&mut self, id: &str) -> Option<bool> {
        let completed = self.notes.iter_mut().find(|note| note.id == id)?.toggle();
        log::debug!("Note {} completed={}", id, completed);
        self.persist();
        Some(completed)
    }

    /// Permanently remove the note with `id`, returning it.
    ///
    /// Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> Option<Note> {
        let index = self.notes.iter().position(|note| note.id == id)?;
        let removed = self.notes.remove(index);
        log::debug!("Deleted note {}", id);
        self.persist();
        Some(removed)
    }

    /// Write the whole collection, replacing the stored value.
    ///
    /// Failures leave the in-memory board as is; they are logged and kept
    /// in `last_error`.
    fn persist(&mut self) {
        match self.write_notes() {
            Ok(()) => {
                log::debug!("Saved {} notes", self.len());
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Failed to save notes: {}", e);
                self.last_error = Some(e);
            }
        }
    }

    fn write_notes(&self) -> StorageResult<()> {
        let raw = serde_json::to_string(&self.notes)?;
        self.storage.write(&self.key, &raw)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::partition;
    use crate::storage::MemoryStorage;

    const KEY: &str = "sticky_notes_test";

    fn empty_store() -> (NoteStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (NoteStore::load(storage.clone(), KEY), storage)
    }

    fn saved_notes(storage: &MemoryStorage) -> Vec<Note> {
        serde_json::from_str(&storage.get(KEY).expect("nothing saved")).expect("saved value is not JSON")
    }

    fn add_id(store: &mut NoteStore<MemoryStorage>, content: &str) -> String {
        store.add(content, NoteColor::Yellow).expect("add failed").id.clone()
    }

    #[test]
    fn test_load_missing_slot() {
        let (store, storage) = empty_store();
        assert_eq!(store.len(), 0);
        assert!(storage.get(KEY).is_none());
    }

    #[test]
    fn test_load_malformed_falls_back_to_empty() {
        let storage = MemoryStorage::with_value(KEY, "[{\"id\": \"broken\"");
        let store = NoteStore::load(storage.clone(), KEY);
        assert_eq!(store.len(), 0);
        // Load never writes
        assert_eq!(storage.get(KEY).as_deref(), Some("[{\"id\": \"broken\""));
    }

    #[test]
    fn test_load_empty_slot_is_treated_as_missing() {
        let storage = MemoryStorage::with_value(KEY, "");
        let store = NoteStore::load(storage.clone(), KEY);
        assert_eq!(store.len(), 0);
        assert_eq!(storage.get(KEY).as_deref(), Some(""));
    }

    #[test]
    fn test_load_wrong_shape_is_not_partially_recovered() {
        let raw = r#"[{"id":"ok","content":"fine","createdAt":1,"color":"yellow","rotation":0.0,"isCompleted":false},{"id":"bad"}]"#;
        let store = NoteStore::load(MemoryStorage::with_value(KEY, raw), KEY);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_trims_and_prepends() {
        let (mut store, storage) = empty_store();
        let note = store.add("  Buy milk  ", NoteColor::Yellow).unwrap().clone();
        assert_eq!(note.content, "Buy milk");
        assert_eq!(note.color, NoteColor::Yellow);
        assert!(!note.is_completed);
        assert!((-3.0..=3.0).contains(&note.rotation));
        assert_eq!(store.notes()[0].id, note.id);
        assert_eq!(saved_notes(&storage), store.notes());
    }

    #[test]
    fn test_add_blank_is_noop() {
        let (mut store, storage) = empty_store();
        assert!(store.add("", NoteColor::Blue).is_none());
        assert!(store.add("   ", NoteColor::Blue).is_none());
        assert!(store.add("\n\t", NoteColor::Blue).is_none());
        assert_eq!(store.len(), 0);
        assert!(storage.get(KEY).is_none());
    }

    #[test]
    fn test_add_order_newest_first() {
        let (mut store, _) = empty_store();
        add_id(&mut store, "A");
        add_id(&mut store, "B");
        add_id(&mut store, "C");
        let contents: Vec<&str> = store.notes().iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_ids_unique() {
        let (mut store, _) = empty_store();
        for i in 0..200 {
            add_id(&mut store, &format!("note {}", i));
        }
        let ids: std::collections::HashSet<&str> = store.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (mut store, storage) = empty_store();
        let id = add_id(&mut store, "Task");
        assert_eq!(store.toggle_complete(&id), Some(true));
        assert!(saved_notes(&storage)[0].is_completed);
        assert_eq!(store.toggle_complete(&id), Some(false));
        assert!(!store.get(&id).unwrap().is_completed);
        assert!(!saved_notes(&storage)[0].is_completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (mut store, storage) = empty_store();
        assert_eq!(store.toggle_complete("nope"), None);
        assert!(storage.get(KEY).is_none());
    }

    #[test]
    fn test_delete_then_noops() {
        let (mut store, storage) = empty_store();
        let keep = add_id(&mut store, "Keep");
        let gone = add_id(&mut store, "Gone");
        store.toggle_complete(&gone);

        let removed = store.delete(&gone).unwrap();
        assert_eq!(removed.content, "Gone");
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].id, keep);
        assert_eq!(saved_notes(&storage).len(), 1);

        assert_eq!(store.toggle_complete(&gone), None);
        assert!(store.delete(&gone).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_active_note() {
        let (mut store, storage) = empty_store();
        let done = add_id(&mut store, "Done");
        store.toggle_complete(&done);
        let active = add_id(&mut store, "Still open");
        let completed_before = partition(store.notes()).completed;

        let removed = store.delete(&active).unwrap();
        assert!(!removed.is_completed);

        let split = partition(store.notes());
        assert!(split.active.iter().all(|n| n.id != active));
        assert_eq!(split.completed, completed_before);

        let saved = saved_notes(&storage);
        assert!(saved.iter().all(|n| n.id != active));
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, done);
    }

    #[test]
    fn test_reload_round_trip() {
        let (mut store, storage) = empty_store();
        add_id(&mut store, "first");
        let second = add_id(&mut store, "second");
        add_id(&mut store, "third");
        store.toggle_complete(&second);

        let reloaded = NoteStore::load(storage, KEY);
        assert_eq!(reloaded.notes(), store.notes());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let (mut store, storage) = empty_store();
        let first = add_id(&mut store, "saved");
        storage.set_fail_writes(true);

        add_id(&mut store, "unsaved");
        assert_eq!(store.len(), 2);
        assert!(matches!(store.last_error(), Some(StorageError::Write { .. })));
        assert_eq!(saved_notes(&storage).len(), 1);

        storage.set_fail_writes(false);
        store.toggle_complete(&first);
        assert!(store.last_error().is_none());
        assert_eq!(saved_notes(&storage).len(), 2);
    }
}
