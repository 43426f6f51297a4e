//! Theme Toggle Component

use leptos::prelude::*;

use crate::models::Theme;

/// Moon in light mode, sun in dark mode; clicking asks for the other theme
#[component]
pub fn ThemeToggle(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| on_toggle.run(())
        >
            {move || match theme.get() {
                Theme::Light => "☾",
                Theme::Dark => "☀",
            }}
        </button>
    }
}
