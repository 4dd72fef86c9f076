//! # Placeadmin Runtime
//!
//! Runtime implementation for the placeadmin domain store.
//!
//! This crate provides the [`Store`] that coordinates reducer execution:
//! every event, whether committed directly or produced by an async command
//! dispatch, is folded into state under a single write lock, giving one
//! total order over all events. Reducers run one at a time against the
//! current state; subscribers observe every committed event in commit order.
//!
//! ## Command dispatch
//!
//! [`Store::dispatch`] is the command runtime of the store: it wraps an
//! arbitrary async body in the three-phase lifecycle
//! `pending → fulfilled | rejected`, commits each phase as a slice event,
//! and hands the caller a [`CommandOutcome`] once both events are reduced.
//! There are no retries, no deduplication, and no cancellation; two
//! concurrent dispatches of the same command both run and whichever result
//! resolves last wins at the reducer.
//!
//! ## Example
//!
//! ```ignore
//! use placeadmin_runtime::Store;
//!
//! let store = Store::new(UsersState::default(), UsersReducer);
//!
//! let outcome = store
//!     .dispatch((), |()| api.users(), UsersEvent::FetchUsers)
//!     .await;
//!
//! let count = store.state(|s| s.users.len()).await;
//! ```

use placeadmin_core::command::{CommandOutcome, Lifecycle};
use placeadmin_core::reducer::Reducer;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

/// Default capacity of the event broadcast channel
const DEFAULT_EVENT_CAPACITY: usize = 16;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (slice logic)
/// 3. Event broadcast (subscription primitive for the view layer)
///
/// # Type Parameters
///
/// - `R`: the reducer implementation, which fixes the state and event types
pub struct Store<R>
where
    R: Reducer,
{
    state: Arc<RwLock<R::State>>,
    reducer: R,
    events: broadcast::Sender<R::Event>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::Event: Clone,
{
    /// Create a new store with initial state and reducer
    ///
    /// The event broadcast channel defaults to a capacity of 16; use
    /// [`Store::with_event_capacity`] when many slow subscribers are
    /// expected.
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        Self::with_event_capacity(initial_state, reducer, DEFAULT_EVENT_CAPACITY)
    }

    /// Create a new store with a custom event broadcast capacity
    #[must_use]
    pub fn with_event_capacity(initial_state: R::State, reducer: R, capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            events,
        }
    }

    /// Commit an event: reduce it into state, then notify subscribers
    ///
    /// The write lock is held across both steps, so subscribers observe
    /// events in exactly the order reducers saw them. Reducers are pure and
    /// synchronous; the lock is never held across an await point.
    pub async fn commit(&self, event: R::Event) {
        let mut state = self.state.write().await;
        self.reducer.reduce(&mut state, event.clone());
        // A send error only means there are no subscribers right now.
        let _ = self.events.send(event);
    }

    /// Read from the current state tree
    ///
    /// The closure runs under the read lock; keep it cheap and never await
    /// inside it.
    pub async fn state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        let state = self.state.read().await;
        f(&state)
    }

    /// Clone the whole state tree
    pub async fn snapshot(&self) -> R::State
    where
        R::State: Clone,
    {
        self.state.read().await.clone()
    }

    /// Subscribe to committed events
    ///
    /// The receiver gets a clone of every event, in commit order. A lagging
    /// receiver skips old events and observes `RecvError::Lagged`.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<R::Event> {
        self.events.subscribe()
    }

    /// Dispatch an async command through the three-phase lifecycle
    ///
    /// Commits `wrap(Pending)` before the body starts, awaits the body, then
    /// commits `wrap(Fulfilled)` or `wrap(Rejected)`. Both events are
    /// committed before the returned future resolves, so a caller that
    /// awaits the dispatch reads post-command state.
    ///
    /// The rejection message is the `Display` rendering of the body's error;
    /// slices substitute their own default when it is empty.
    pub async fn dispatch<Arg, Ok, Err, Fut>(
        &self,
        arg: Arg,
        body: impl FnOnce(Arg) -> Fut,
        wrap: impl Fn(Lifecycle<Arg, Ok>) -> R::Event,
    ) -> CommandOutcome
    where
        Arg: Clone,
        Err: Display,
        Fut: Future<Output = Result<Ok, Err>>,
    {
        self.commit(wrap(Lifecycle::Pending { arg: arg.clone() })).await;

        match body(arg).await {
            Ok(value) => {
                self.commit(wrap(Lifecycle::Fulfilled { value })).await;
                CommandOutcome::Fulfilled
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(error = %message, "command rejected");
                self.commit(wrap(Lifecycle::Rejected {
                    message: message.clone(),
                }))
                .await;
                CommandOutcome::Rejected(message)
            }
        }
    }
}
