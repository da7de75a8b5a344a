//! Empty Board Placeholder

use leptos::prelude::*;

#[component]
pub fn EmptyBoard() -> impl IntoView {
    view! {
        <div class="empty-board">
            <div class="empty-board-icon">"+"</div>
            <p class="empty-board-title">"目前沒有便條紙"</p>
            <p class="empty-board-hint">"在上方新增一張來開始吧！"</p>
        </div>
    }
}
