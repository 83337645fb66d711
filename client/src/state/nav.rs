//! Navigation bar state: active section, scroll progress, mobile overlay.
//!
//! DESIGN
//! ======
//! The browser hands us raw geometry (scroll offset, document height, section
//! bounding rects) and everything else is computed here. Keeping the geometry
//! math free of `web-sys` lets the tracker run under native tests.
//!
//! TRADE-OFFS
//! ==========
//! When no section straddles the reference line (e.g. in the gap between two
//! sections, or past the footer) the previous active section is kept rather
//! than cleared, so the highlight never flickers to "nothing".

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Distance from the viewport top that decides which section is active.
pub const ACTIVE_LINE_PX: f64 = 100.0;

/// Fixed header height subtracted from a section's offset when navigating.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll offset past which the bar switches to its opaque "scrolled" look.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Named page anchors, in declaration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Education,
    Experience,
    Certifications,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 8] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Education,
        Self::Experience,
        Self::Certifications,
        Self::Projects,
        Self::Contact,
    ];

    /// DOM element id of the section anchor.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Certifications => "certifications",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Certifications => "Certifications",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    #[must_use]
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Document-level scroll geometry sampled on a scroll tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub doc_height: f64,
    pub viewport_height: f64,
}

/// Pick the first section (in the order given) whose rect straddles
/// [`ACTIVE_LINE_PX`]. Falls back to `previous` when none does.
///
/// Sections missing from the page should simply be left out of `rects`.
#[must_use]
pub fn resolve_active(rects: &[(Section, SectionRect)], previous: Section) -> Section {
    rects
        .iter()
        .find(|(_, rect)| rect.straddles(ACTIVE_LINE_PX))
        .map_or(previous, |(section, _)| *section)
}

/// Scroll completion in percent, clamped to `[0, 100]`.
///
/// Returns 0 when the document is not taller than the viewport.
#[must_use]
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let range = metrics.doc_height - metrics.viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (metrics.offset / range * 100.0).clamp(0.0, 100.0)
}

/// Window scroll offset that brings `section` under the fixed header.
#[must_use]
pub fn target_offset(section: Section, offset_top: f64) -> f64 {
    match section {
        Section::Hero => 0.0,
        _ => offset_top - HEADER_OFFSET_PX,
    }
}

/// Navigation bar state shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
    pub scrolled: bool,
    pub progress: f64,
}

impl Default for NavState {
    fn default() -> Self {
        Self { active: Section::Hero, menu_open: false, scrolled: false, progress: 0.0 }
    }
}

impl NavState {
    /// Fold one scroll sample into the state.
    pub fn apply_scroll(&mut self, metrics: ScrollMetrics, rects: &[(Section, SectionRect)]) {
        self.scrolled = metrics.offset > SCROLLED_THRESHOLD_PX;
        self.active = resolve_active(rects, self.active);
        self.progress = scroll_progress(metrics);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Close the mobile overlay and return the offset to smooth-scroll to.
    pub fn begin_navigation(&mut self, section: Section, offset_top: f64) -> f64 {
        self.close_menu();
        target_offset(section, offset_top)
    }

    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}
