//! Inbound adapters that drive the popular-movies query on behalf of a view.
//!
//! [`list`] owns the accumulated list state and its transitions,
//! [`presentation`] projects domain movies into display fields, and
//! [`terminal`] renders both as plain text for the command-line client.

pub mod list;
pub mod presentation;
pub mod terminal;
