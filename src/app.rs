//! Sticky Board App
//!
//! Root component: loads the board, provides the store and compose state,
//! and lays out the compose bar, active notes and completed list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CompletedList, ComposeBar, NoteGrid};
use crate::compose::ComposeState;
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::storage::BoardStorage;
use crate::store::NoteStore;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // Load once on mount
    let storage = BoardStorage::detect();
    let durable = storage.is_durable();
    let store = NoteStore::load(storage, config.storage_key.clone());
    let board = BoardContext::new(store, durable);

    // Provide context to all children
    provide_context(board);
    provide_context(Store::new(ComposeState::new(config.default_color)));

    view! {
        <div class="app-layout">
            <ComposeBar />

            <main class="board">
                <Show when=move || !board.durable>
                    <p class="storage-warning">"此瀏覽器無法保存便條紙，重新整理後將會遺失。"</p>
                </Show>
                {move || board.save_error().map(|e| view! {
                    <p class="storage-warning">"儲存失敗: " {e}</p>
                })}

                <NoteGrid />

                <CompletedList />

                <p class="note-count">{move || board.partition().summary()}</p>
            </main>
        </div>
    }
}
