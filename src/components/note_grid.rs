//! Note Grid Component
//!
//! Active notes, newest first, or the empty placeholder.

use leptos::prelude::*;

use crate::board::Partition;
use crate::components::{EmptyBoard, StickyNote};
use crate::context::use_board;

#[component]
pub fn NoteGrid() -> impl IntoView {
    let board = use_board();
    let split = Memo::new(move |_| board.partition());

    view! {
        <Show
            when=move || !split.with(Partition::show_empty_state)
            fallback=|| view! { <EmptyBoard /> }
        >
            <div class="note-grid">
                <For
                    each=move || split.with(|split| split.active.clone())
                    key=|note| note.id.clone()
                    children=move |note| view! { <StickyNote note=note /> }
                />
            </div>
        </Show>
    }
}
