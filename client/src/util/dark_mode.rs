//! Theme preference: read, apply and toggle.
//!
//! The preference is stored in `localStorage` under [`STORAGE_KEY`] as
//! `"dark"` or `"light"` and applied as a `data-theme` attribute on the
//! `<html>` element. With nothing stored, the system `prefers-color-scheme`
//! decides. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so server
//! rendering stays deterministic (always light until hydration).

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "theme";

/// Interpret a stored preference. Unknown values count as unset.
#[must_use]
pub fn parse_stored(value: &str) -> Option<bool> {
    match value.trim() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Read the theme preference.
///
/// Returns the stored choice if there is one, otherwise whether the system
/// prefers dark mode.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(stored) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_stored) {
                return stored;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if el.set_attribute("data-theme", theme_name(dark)).is_err() {
                log::warn!("failed to apply theme attribute");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the new choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme_name(next));
        }
    }
    next
}
