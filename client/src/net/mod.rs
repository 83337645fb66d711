//! Networking modules for the contact API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls and `types` defines the wire schema shared with
//! the host crate.

pub mod api;
pub mod types;
