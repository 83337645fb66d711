//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`chat`, `nav`, `contact`, `ui`) so each component
//! depends on a small focused model. Models are plain structs mutated through
//! methods; components wrap them in `RwSignal` and provide them via context.

pub mod chat;
pub mod chat_replies;
pub mod contact;
pub mod nav;
pub mod ui;
