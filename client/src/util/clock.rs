//! Wall-clock and randomness helpers backed by the browser.
//!
//! SSR has no meaningful "now" for UI events, so the non-hydrate fallbacks
//! return fixed values; they only exist to keep shared code compiling.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Uniform sample in `[0, 1)`.
pub fn random_unit() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.5
    }
}

/// `HH:MM` label for a timestamp, in the visitor's local time zone.
pub fn time_label(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format_clock(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        utc_time_label(timestamp_ms)
    }
}

/// `HH:MM` label for a timestamp in UTC.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn utc_time_label(timestamp_ms: f64) -> String {
    const MS_PER_MINUTE: f64 = 60_000.0;
    let minutes_of_day = (timestamp_ms / MS_PER_MINUTE).floor().rem_euclid(24.0 * 60.0) as u32;
    format_clock(minutes_of_day / 60, minutes_of_day % 60)
}

#[must_use]
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}
