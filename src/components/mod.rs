//! UI Components
//!
//! Reusable Leptos components.

mod compose_bar;
mod color_picker;
mod sticky_note;
mod note_grid;
mod empty_board;
mod completed_list;

pub use compose_bar::ComposeBar;
pub use color_picker::ColorPicker;
pub use sticky_note::StickyNote;
pub use note_grid::NoteGrid;
pub use empty_board::EmptyBoard;
pub use completed_list::CompletedList;
