//! Compose State
//!
//! Draft text and color picker state for the new-note bar. Lives in a
//! `reactive_stores::Store` so the input, picker and submit button each
//! track only the field they read. Never persisted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::NoteColor;

/// Transient state of the compose bar
#[derive(Clone, Debug, Default, Store)]
pub struct ComposeState {
    /// Text being typed
    pub draft: String,
    /// Color for the next note, kept across submissions
    pub selected_color: NoteColor,
    /// Whether the input currently has focus
    pub focused: bool,
}

impl ComposeState {
    pub fn new(default_color: NoteColor) -> Self {
        Self {
            selected_color: default_color,
            ..Default::default()
        }
    }
}

/// Submit is allowed only for non-blank drafts
pub fn can_submit(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// Color picker shows while the input is focused or holds any text
pub fn picker_visible(focused: bool, draft: &str) -> bool {
    focused || !draft.is_empty()
}

/// Trimmed content and color for a new note, `None` for blank drafts
pub fn prepare_submission(draft: &str, color: NoteColor) -> Option<(String, NoteColor)> {
    if !can_submit(draft) {
        return None;
    }
    Some((draft.trim().to_string(), color))
}

/// Type alias for the compose store
pub type ComposeStore = Store<ComposeState>;

/// Get the compose store from context
pub fn use_compose_store() -> ComposeStore {
    expect_context::<ComposeStore>()
}

/// Submit the current draft through `on_submit`, clearing it on success
pub fn submit_draft(store: &ComposeStore, on_submit: impl FnOnce(String, NoteColor)) {
    let draft = store.draft().get_untracked();
    if let Some((content, color)) = prepare_submission(&draft, store.selected_color().get_untracked()) {
        store.draft().set(String::new());
        on_submit(content, color);
    }
}

/// Set the draft text
pub fn store_set_draft(store: &ComposeStore, text: String) {
    store.draft().set(text);
}

/// Select the color for upcoming notes
pub fn store_select_color(store: &ComposeStore, color: NoteColor) {
    store.selected_color().set(color);
}

/// Record input focus changes
pub fn store_set_focused(store: &ComposeStore, focused: bool) {
    store.focused().set(focused);
}
