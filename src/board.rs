//! Board Partitions
//!
//! Splits the note collection into the active board and the completed list.

use crate::models::Note;

/// Notes split by completion, each side in collection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub active: Vec<Note>,
    pub completed: Vec<Note>,
}

impl Partition {
    /// True when the board has nothing active, regardless of completed notes
    pub fn show_empty_state(&self) -> bool {
        self.active.is_empty()
    }

    /// Footer line with both counts
    pub fn summary(&self) -> String {
        format!("{} 張便條紙，{} 項已完成", self.active.len(), self.completed.len())
    }
}

pub fn partition(notes: &[Note]) -> Partition {
    let (completed, active): (Vec<Note>, Vec<Note>) = notes.iter().cloned().partition(|note| note.is_completed);
    Partition { active, completed }
}
