//! Sticky Note Component
//!
//! A single active note card on the board.

use leptos::prelude::*;

use crate::context::use_board;
use crate::models::Note;
use crate::utils::format_date;

/// Rotated note card; clicking it marks the note complete
#[component]
pub fn StickyNote(note: Note) -> impl IntoView {
    let board = use_board();

    let id = note.id.clone();
    let delete_id = note.id.clone();

    view! {
        <div
            class=format!("sticky-note {}", note.color.css_class())
            style=format!("transform: rotate({}deg);", note.rotation)
            title="點擊標記為完成"
            on:click=move |_| board.toggle_complete(&id)
        >
            <div class="sticky-pin"></div>

            <p class="sticky-content">{note.content}</p>

            <div class="sticky-footer">
                <span class="sticky-date">{format_date(note.created_at)}</span>
                <button
                    class="sticky-delete"
                    title="刪除"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        board.delete(&delete_id);
                    }
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
