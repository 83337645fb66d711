//! DOM geometry and scrolling glue for the page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation tracker and chat widget work on plain numbers from
//! `state::nav`; this module is the only place that reads them from (or
//! pushes them into) the live document. Every function is a no-op or returns
//! an empty value outside the browser.

use crate::state::nav::{ScrollMetrics, Section, SectionRect};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Sample current window scroll geometry.
pub fn scroll_metrics() -> ScrollMetrics {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let offset = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let doc_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        ScrollMetrics { offset, doc_height, viewport_height }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ScrollMetrics::default()
    }
}

/// Viewport-relative rects for every section present on the page, in
/// declaration order. Missing anchors are skipped.
pub fn section_rects() -> Vec<(Section, SectionRect)> {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        Section::ALL
            .into_iter()
            .filter_map(|section| {
                let rect = doc.get_element_by_id(section.id())?.get_bounding_client_rect();
                Some((section, SectionRect { top: rect.top(), bottom: rect.bottom() }))
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Document offset of a section's top edge, if the anchor exists.
pub fn section_offset_top(section: Section) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let el = web_sys::window()?
            .document()?
            .get_element_by_id(section.id())?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
        None
    }
}

/// Smooth-scroll the window to an absolute offset.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Smooth-scroll a section anchor into view.
pub fn scroll_into_view(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        else {
            log::debug!("scroll target #{} not on page", section.id());
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}

/// Trigger a browser download of `url` saved as `filename`.
pub fn download(url: &str, filename: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(anchor) = doc
            .create_element("a")
            .map_err(|_| ())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().map_err(|_| ()))
        else {
            log::warn!("could not create download link");
            return;
        };
        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.click();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, filename);
    }
}
