//! Rolodex - a lightweight terminal contact panel.
//!
//! The panel host owns the authoritative record list and answers UI requests
//! over an in-process message channel; the UI is a four-view state machine
//! (table, details, edit, create) rendering from a local cache of that list.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing the record entity, store, and channel protocol.
pub mod domain;
/// Infrastructure layer containing the host task and configuration adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "rolodex";
