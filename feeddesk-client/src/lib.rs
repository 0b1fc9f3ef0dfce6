//! Client-side engine for the feed manager UI.
//!
//! A thin layering over [`feeddesk_core`]: the [`api`] module talks HTTP to
//! the feeds server, the [`interpreter`] executes effects against it, and
//! the [`store`] owns the model and runs the event loop a view renders from.

pub mod api;
pub mod config;
pub mod interpreter;
pub mod store;
