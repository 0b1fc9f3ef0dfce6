//! Explicit state machines for the feed list UI.
//!
//! This module implements pure functional state machines for the lifecycle
//! of each feed row and of the draft (not-yet-created) row. The design
//! separates:
//! - **State**: what a row is doing (`FeedState`, `DraftState`)
//! - **Events**: what happened (`FeedEvent`, `DraftEvent`)
//! - **Effects**: what to do (`Effect`)
//! - **Transition**: pure function `(State, Event) -> (State, Vec<Effect>)`
//!
//! The interpreter (in the client crate) executes effects against the real
//! HTTP API and routes result events back into the store.

pub mod effect;
pub mod event;
pub mod state;
pub mod transition;

pub use effect::*;
pub use event::*;
pub use state::*;
pub use transition::*;
