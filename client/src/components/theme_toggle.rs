//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    let label = move || {
        if ui.with(|s| s.dark_mode) { "Switch to light mode" } else { "Switch to dark mode" }
    };

    view! {
        <button class="theme-toggle" aria-label=label title=label on:click=on_click>
            {move || if ui.with(|s| s.dark_mode) { "\u{2600}" } else { "\u{263e}" }}
        </button>
    }
}
