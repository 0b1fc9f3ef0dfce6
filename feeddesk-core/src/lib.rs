//! Pure logic for the feeddesk feed manager.
//!
//! This crate knows nothing about HTTP or rendering. It defines the feed
//! value types, the wire representation the server speaks, and the explicit
//! state machines that drive each row of the feed list. All side effects are
//! returned as data and executed elsewhere.

pub mod feed;
pub mod state_machine;
pub mod wire;
