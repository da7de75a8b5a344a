//! Completed List Component
//!
//! Completed notes with restore and permanent delete. Hidden when empty.

use leptos::prelude::*;

use crate::context::use_board;
use crate::models::Note;
use crate::utils::format_date;

#[component]
pub fn CompletedList() -> impl IntoView {
    let board = use_board();
    let completed = Memo::new(move |_| board.partition().completed);

    view! {
        <Show when=move || completed.with(|notes| !notes.is_empty())>
            <section class="completed-list">
                <div class="completed-header">
                    <span class="completed-icon">"✔"</span>
                    <h2>"已完成事項"</h2>
                    <span class="completed-count">{move || completed.with(|notes| notes.len())}</span>
                </div>

                <div class="completed-rows">
                    <For
                        each=move || completed.get()
                        key=|note| note.id.clone()
                        children=move |note| view! { <CompletedRow note=note /> }
                    />
                </div>
            </section>
        </Show>
    }
}

/// One completed note with its actions
#[component]
fn CompletedRow(note: Note) -> impl IntoView {
    let board = use_board();

    let restore_id = note.id.clone();
    let delete_id = note.id.clone();

    view! {
        <div class="completed-row">
            <div class="completed-text">
                <span class="completed-content">{note.content}</span>
                <span class="completed-date">"建立於 " {format_date(note.created_at)}</span>
            </div>

            <div class="completed-actions">
                <button
                    class="restore-btn"
                    title="還原"
                    on:click=move |_| board.toggle_complete(&restore_id)
                >
                    "↺"
                </button>
                <button
                    class="delete-btn"
                    title="永久刪除"
                    on:click=move |_| board.delete(&delete_id)
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
