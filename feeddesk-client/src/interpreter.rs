//! Effect interpreter.
//!
//! Executes the effects a transition produced against the real API and
//! returns the result events to feed back into the store. This is the only
//! place where effects meet I/O; the transitions themselves stay pure.

use std::sync::Arc;

use feeddesk_core::feed::{FeedId, FeedInfo};
use feeddesk_core::state_machine::effect::{Effect, LogLevel};
use feeddesk_core::state_machine::event::{DraftEvent, FeedEvent};

use crate::api::FeedsApi;

/// Which machine an effect came from.
///
/// Transitions emit effects without knowing their own id; the store attaches
/// the origin when handing them to the interpreter, and the interpreter
/// addresses the result events with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectOrigin {
    Feed(FeedId),
    Draft,
}

/// An event addressed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Route an event to one row's machine.
    Feed { id: FeedId, event: FeedEvent },
    /// Route an event to the draft machine.
    Draft { event: DraftEvent },
    /// The server confirmed a deletion; remove the row from the collection.
    FeedDeleted { id: FeedId },
    /// The server created a feed; insert the row and reset the draft.
    FeedCreated { id: FeedId, info: FeedInfo },
}

/// Dependencies the interpreter needs to execute effects.
#[derive(Clone)]
pub struct InterpreterContext {
    pub api: Arc<dyn FeedsApi>,
}

impl InterpreterContext {
    pub fn new(api: Arc<dyn FeedsApi>) -> Self {
        Self { api }
    }
}

/// Execute effects in order, returning the result events.
///
/// Request effects resolve to exactly one event each; `Log` effects resolve
/// to none.
pub async fn execute_effects(
    ctx: &InterpreterContext,
    origin: &EffectOrigin,
    effects: Vec<Effect>,
) -> Vec<StoreEvent> {
    let mut events = Vec::new();

    for effect in effects {
        match (origin, effect) {
            (EffectOrigin::Feed(id), Effect::SaveFeed { info }) => {
                let event = match ctx.api.update_feed(id, &info).await {
                    Ok(()) => FeedEvent::SaveSucceeded,
                    Err(e) => {
                        tracing::warn!(feed_id = %id, error = %e, "Save request failed");
                        FeedEvent::SaveFailed(e.to_string())
                    }
                };
                events.push(StoreEvent::Feed {
                    id: id.clone(),
                    event,
                });
            }

            (EffectOrigin::Feed(id), Effect::DeleteFeed) => match ctx.api.delete_feed(id).await {
                Ok(()) => events.push(StoreEvent::FeedDeleted { id: id.clone() }),
                Err(e) => {
                    tracing::warn!(feed_id = %id, error = %e, "Delete request failed");
                    events.push(StoreEvent::Feed {
                        id: id.clone(),
                        event: FeedEvent::DeleteFailed(e.to_string()),
                    });
                }
            },

            (EffectOrigin::Draft, Effect::CreateFeed { info }) => {
                match ctx.api.create_feed(&info).await {
                    Ok((id, info)) => events.push(StoreEvent::FeedCreated { id, info }),
                    Err(e) => {
                        tracing::warn!(error = %e, "Create request failed");
                        events.push(StoreEvent::Draft {
                            event: DraftEvent::CreateFailed(e.to_string()),
                        });
                    }
                }
            }

            (_, Effect::Log { level, message }) => match level {
                LogLevel::Debug => tracing::debug!("{}", message),
                LogLevel::Info => tracing::info!("{}", message),
                LogLevel::Warn => tracing::warn!("{}", message),
                LogLevel::Error => tracing::error!("{}", message),
            },

            // A request effect addressed to the wrong machine is a bug in
            // the transition tables; drop it rather than hit the server.
            (origin, effect) => {
                tracing::warn!(?origin, ?effect, "Dropping effect with mismatched origin");
            }
        }
    }

    events
}
