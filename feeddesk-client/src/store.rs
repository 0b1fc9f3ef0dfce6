//! The store: owns the whole UI model and runs the event loop.
//!
//! Dispatching an event transitions the addressed machine, executes the
//! resulting effects through the interpreter, and feeds the result events
//! back in until none remain. Collection-level changes (a confirmed deletion
//! or creation) are applied here directly; everything else is delegated to
//! the per-row transition functions.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use feeddesk_core::feed::{FeedId, FeedInfo};
use feeddesk_core::state_machine::effect::Effect;
use feeddesk_core::state_machine::event::{DraftEvent, FeedEvent};
use feeddesk_core::state_machine::state::{DraftState, FeedState};
use feeddesk_core::state_machine::transition::{draft_transition, transition};

use crate::interpreter::{execute_effects, EffectOrigin, InterpreterContext, StoreEvent};

/// The whole UI model.
///
/// `Uninitialized` covers the window between startup and the initial load
/// resolving; events dispatched during it are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Uninitialized,
    Ready {
        /// Rows keyed by id. The map ordering is the display order.
        feeds: BTreeMap<FeedId, FeedState>,
        draft: DraftState,
    },
}

pub struct FeedStore {
    model: RwLock<Model>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self {
            model: RwLock::new(Model::Uninitialized),
        }
    }

    /// A copy of the current model, for rendering.
    pub async fn snapshot(&self) -> Model {
        self.model.read().await.clone()
    }

    /// Replace the model with a fresh collection, every row at rest.
    pub async fn reset(&self, feeds: Vec<(FeedId, FeedInfo)>) {
        let feeds = feeds
            .into_iter()
            .map(|(id, info)| (id, FeedState::viewing(info)))
            .collect();
        *self.model.write().await = Model::Ready {
            feeds,
            draft: DraftState::default(),
        };
    }

    /// Fetch the collection from the server and populate the model.
    ///
    /// A failed fetch still leaves the store Ready, with an empty
    /// collection, so the UI starts in a usable state either way.
    pub async fn load(&self, ctx: &InterpreterContext) {
        match ctx.api.list_feeds().await {
            Ok(feeds) => {
                tracing::info!(count = feeds.len(), "Loaded feed collection");
                self.reset(feeds).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Initial load failed, starting empty");
                self.reset(Vec::new()).await;
            }
        }
    }

    pub async fn dispatch_feed_event(
        &self,
        ctx: &InterpreterContext,
        id: FeedId,
        event: FeedEvent,
    ) {
        self.run(ctx, StoreEvent::Feed { id, event }).await;
    }

    pub async fn dispatch_draft_event(&self, ctx: &InterpreterContext, event: DraftEvent) {
        self.run(ctx, StoreEvent::Draft { event }).await;
    }

    /// Remove a row the server confirmed as deleted. Idempotent.
    pub async fn apply_delete_succeeded(&self, id: FeedId) {
        let mut model = self.model.write().await;
        self.apply(&mut model, StoreEvent::FeedDeleted { id });
    }

    /// Insert a row the server confirmed as created and reset the draft.
    pub async fn apply_create_succeeded(&self, id: FeedId, info: FeedInfo) {
        let mut model = self.model.write().await;
        self.apply(&mut model, StoreEvent::FeedCreated { id, info });
    }

    /// Process an event and everything it causes, to quiescence.
    ///
    /// The model lock is held only while applying an event, never across a
    /// request, so the model always shows the busy state while its request
    /// is in flight.
    async fn run(&self, ctx: &InterpreterContext, event: StoreEvent) {
        let mut events_to_process = vec![event];

        while let Some(event) = events_to_process.pop() {
            let effects = {
                let mut model = self.model.write().await;
                self.apply(&mut model, event)
            };

            if let Some((origin, effects)) = effects {
                let result_events = execute_effects(ctx, &origin, effects).await;
                events_to_process.extend(result_events);
            }
        }
    }

    /// Apply one event to the model, returning any effects to execute.
    fn apply(&self, model: &mut Model, event: StoreEvent) -> Option<(EffectOrigin, Vec<Effect>)> {
        let Model::Ready { feeds, draft } = model else {
            tracing::warn!(?event, "Dropping event dispatched before initial load");
            return None;
        };

        match event {
            StoreEvent::Feed { id, event } => {
                let Some(state) = feeds.get(&id) else {
                    // The row was deleted while this event was in flight.
                    tracing::info!(
                        feed_id = %id,
                        event = %event.log_summary(),
                        "Dropping event for unknown feed"
                    );
                    return None;
                };

                tracing::debug!(feed_id = %id, event = %event.log_summary(), "Processing event");
                let result = transition(state.clone(), event);
                feeds.insert(id.clone(), result.state);
                Some((EffectOrigin::Feed(id), result.effects))
            }

            StoreEvent::Draft { event } => {
                tracing::debug!(event = %event.log_summary(), "Processing draft event");
                let result = draft_transition(draft.clone(), event);
                *draft = result.state;
                Some((EffectOrigin::Draft, result.effects))
            }

            StoreEvent::FeedDeleted { id } => {
                // Idempotent: removing an already-absent row is a no-op.
                if feeds.remove(&id).is_some() {
                    tracing::info!(feed_id = %id, "Feed deleted");
                }
                None
            }

            StoreEvent::FeedCreated { id, info } => {
                tracing::info!(feed_id = %id, "Feed created");
                // An id collision means our view of that row was stale;
                // the server's record wins.
                feeds.insert(id, FeedState::viewing(info));
                *draft = DraftState::Idle;
                None
            }
        }
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new()
    }
}
