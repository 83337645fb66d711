//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and the floating chat widget while
//! reading/writing shared state from Leptos context providers.

pub mod about_section;
pub mod chat_widget;
pub mod contact_section;
pub mod navbar;
pub mod page_section;
pub mod theme_toggle;
