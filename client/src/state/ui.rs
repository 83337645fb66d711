//! Local UI chrome state (theme, about-section tab).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the chat/nav/contact models so
//! page chrome can evolve independently of widget behavior.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and the about section tabs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub about_tab: AboutTab,
}

/// Tabs available in the about section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AboutTab {
    #[default]
    Story,
    Values,
    Unique,
}

impl AboutTab {
    pub const ALL: [Self; 3] = [Self::Story, Self::Values, Self::Unique];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Values => "values",
            Self::Unique => "unique",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Story => "My Story",
            Self::Values => "Core Values",
            Self::Unique => "What Sets Me Apart",
        }
    }
}
