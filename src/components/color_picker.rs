//! Color Picker Component
//!
//! Palette swatches for the compose bar.

use leptos::prelude::*;

use crate::compose::{store_select_color, use_compose_store, ComposeStateStoreFields};
use crate::models::NoteColor;

/// Swatch row; the selected color stays until another is picked
#[component]
pub fn ColorPicker() -> impl IntoView {
    let compose = use_compose_store();

    view! {
        <div class="color-picker">
            <span class="color-picker-label">"顏色:"</span>
            {NoteColor::PALETTE.iter().map(|&color| {
                let is_selected = move || compose.selected_color().get() == color;
                view! {
                    <button
                        type="button"
                        class=move || {
                            if is_selected() {
                                format!("color-swatch {} selected", color.css_class())
                            } else {
                                format!("color-swatch {}", color.css_class())
                            }
                        }
                        data-color=color.as_str()
                        title=color.label()
                        aria-label=color.label()
                        on:click=move |_| store_select_color(&compose, color)
                    />
                }
            }).collect_view()}
        </div>
    }
}
