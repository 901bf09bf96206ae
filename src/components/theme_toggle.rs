//! Light/dark toggle button for Leptos pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The button shares one `RwSignal<ThemeName>` through context so other
//! components can react to the active theme. On hydrate, clicks go through
//! the browser switcher; during SSR the signal simply flips.

use leptos::prelude::*;

use crate::theme::ThemeName;

/// Seed the shared theme signal and provide it as context.
pub fn provide_theme_context() -> RwSignal<ThemeName> {
    let theme = RwSignal::new(initial_theme());
    provide_context(theme);
    theme
}

/// Toggle button; expects [`provide_theme_context`] higher in the tree.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeName>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let next = toggle_in_host(theme.get_untracked());
                theme.set(next);
            }
            title="Toggle theme"
        >
            {move || toggle_label(theme.get())}
        </button>
    }
}

/// Sun while dark (click for light), moon while light.
pub fn toggle_label(theme: ThemeName) -> &'static str {
    if theme.is_dark() { "☀" } else { "☾" }
}

fn initial_theme() -> ThemeName {
    #[cfg(feature = "hydrate")]
    {
        crate::browser::current_theme()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeName::default()
    }
}

fn toggle_in_host(current: ThemeName) -> ThemeName {
    #[cfg(feature = "hydrate")]
    {
        match crate::browser::toggle() {
            Ok(next) => next,
            Err(err) => {
                log::warn!("theme toggle failed: {err}");
                current
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        current.toggled()
    }
}

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod tests;
