//! Compose Bar Component
//!
//! Header with the new-note input, submit button and color picker.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::ColorPicker;
use crate::compose::{
    can_submit, picker_visible, store_set_draft, store_set_focused, submit_draft,
    use_compose_store, ComposeStateStoreFields,
};
use crate::context::use_board;

/// Delay before hiding the picker on blur, so a swatch click lands first
const BLUR_HIDE_MS: u32 = 200;

/// Form for creating new notes
#[component]
pub fn ComposeBar() -> impl IntoView {
    let board = use_board();
    let compose = use_compose_store();

    let create_note = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_draft(&compose, |content, color| board.add(&content, color));
    };

    let show_picker = move || {
        let focused = compose.focused().get();
        compose.draft().with(|draft| picker_visible(focused, draft))
    };

    view! {
        <header class="compose-bar">
            <div class="compose-title">
                <span class="compose-icon">"📝"</span>
                <h1>"隨手貼 Sticky"</h1>
            </div>

            <form class="compose-form" on:submit=create_note>
                <input
                    type="text"
                    placeholder="記點什麼..."
                    prop:value=move || compose.draft().get()
                    on:input=move |ev| store_set_draft(&compose, event_target_value(&ev))
                    on:focus=move |_| store_set_focused(&compose, true)
                    on:blur=move |_| {
                        Timeout::new(BLUR_HIDE_MS, move || store_set_focused(&compose, false)).forget();
                    }
                />
                <button
                    type="submit"
                    class="compose-submit"
                    disabled=move || !compose.draft().with(|draft| can_submit(draft))
                >
                    "+"
                </button>
            </form>

            <div class=move || if show_picker() { "color-picker-row open" } else { "color-picker-row" }>
                <ColorPicker />
            </div>
        </header>
    }
}
