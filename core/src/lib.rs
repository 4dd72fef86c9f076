//! # Placeadmin Core
//!
//! Core traits and types for the placeadmin domain store.
//!
//! This crate provides the fundamental abstractions shared by every store
//! slice and by the runtime that drives them:
//!
//! - **State**: the in-memory model a slice owns
//! - **Event**: a tagged sum of everything that can happen to a slice
//! - **Reducer**: pure function `(State, Event) → State`
//! - **Lifecycle**: the three-phase envelope every async command produces
//!   (`pending → fulfilled | rejected`)
//! - **`CommandOutcome`**: the completion signal a caller may await
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: commands produce events, reducers fold events
//!   into state, views read state
//! - Reducers are synchronous and never perform I/O; all I/O happens in
//!   command bodies executed by the runtime
//! - Partial server echoes are reconciled with explicit per-field merges,
//!   never a dynamic "merge anything" helper
//!
//! ## Example
//!
//! ```ignore
//! use placeadmin_core::{command::Lifecycle, reducer::Reducer};
//!
//! enum CounterEvent {
//!     Refresh(Lifecycle<(), u64>),
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = u64;
//!     type Event = CounterEvent;
//!
//!     fn reduce(&self, state: &mut u64, event: CounterEvent) {
//!         match event {
//!             CounterEvent::Refresh(Lifecycle::Fulfilled { value }) => *state = value,
//!             CounterEvent::Refresh(_) => {}
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};

/// Reducer module - the core trait for slice logic
///
/// Reducers are pure functions: `(State, Event) → State`.
///
/// They contain all state-transition logic and are deterministic and
/// testable without a runtime or a network.
pub mod reducer {
    /// The Reducer trait - core abstraction for slice logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: the slice state this reducer operates on
    /// - `Event`: the event type this reducer folds into state
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for UsersReducer {
    ///     type State = UsersState;
    ///     type Event = UsersEvent;
    ///
    ///     fn reduce(&self, state: &mut UsersState, event: UsersEvent) {
    ///         match event {
    ///             UsersEvent::FetchUsers(lifecycle) => { /* ... */ }
    ///             _ => {}
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The event type this reducer folds into state
        type Event;

        /// Fold an event into the current state
        ///
        /// This is a pure, synchronous function. It must not block, perform
        /// I/O, or panic; every event is reduced exactly once, in the total
        /// order established by the runtime.
        fn reduce(&self, state: &mut Self::State, event: Self::Event);
    }
}

/// Command module - the three-phase lifecycle of an async operation
///
/// A command is a named async operation (fetch, update, delete) whose
/// execution the runtime turns into observable events. Dispatching a
/// command produces, in program order:
///
/// 1. `Pending` carrying the argument,
/// 2. either `Fulfilled` carrying the result or `Rejected` carrying a
///    human-readable message.
///
/// The runtime performs no retries, no deduplication, and no cancellation;
/// two concurrent dispatches of the same command are both honoured and the
/// last `Fulfilled` to arrive wins at the reducer.
pub mod command {
    /// Lifecycle of a single command dispatch
    ///
    /// Slices embed this envelope in their event enums, one variant per
    /// command, so the reducer can observe every phase of the request.
    ///
    /// # Type Parameters
    ///
    /// - `Arg`: the argument the command was dispatched with
    /// - `Ok`: the decoded result of the command body
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Lifecycle<Arg, Ok> {
        /// The command body has been started
        Pending {
            /// Argument the command was dispatched with
            arg: Arg,
        },

        /// The command body resolved successfully
        Fulfilled {
            /// Decoded result of the command body
            value: Ok,
        },

        /// The command body failed
        ///
        /// The message is the rendered transport or decoding error. It may
        /// be empty; slices substitute their own default message when it is.
        Rejected {
            /// Rendered error message
            message: String,
        },
    }

    /// Completion signal of a command dispatch
    ///
    /// Returned by the runtime after both lifecycle events have been
    /// committed. This is the only post-dispatch signal a caller gets; the
    /// view uses it to drive transient notifications without reading slice
    /// state.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum CommandOutcome {
        /// The command body resolved and its `Fulfilled` event was reduced
        Fulfilled,

        /// The command body failed and its `Rejected` event was reduced
        Rejected(String),
    }

    impl CommandOutcome {
        /// Whether the dispatch fulfilled
        #[must_use]
        pub const fn is_fulfilled(&self) -> bool {
            matches!(self, Self::Fulfilled)
        }

        /// Whether the dispatch was rejected
        #[must_use]
        pub const fn is_rejected(&self) -> bool {
            matches!(self, Self::Rejected(_))
        }

        /// The rejection message, if any
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            match self {
                Self::Fulfilled => None,
                Self::Rejected(message) => Some(message),
            }
        }

        /// Replace an empty rejection message with a slice default
        ///
        /// Transport errors occasionally render to an empty string; slices
        /// substitute a human-readable default so the view never shows a
        /// blank notification.
        #[must_use]
        pub fn or_default_message(self, default: &str) -> Self {
            match self {
                Self::Rejected(message) if message.is_empty() => {
                    Self::Rejected(default.to_string())
                }
                outcome => outcome,
            }
        }
    }
}

/// Loading module - per-slice request status
///
/// Every slice carries one `LoadingStatus` driven by the fetch commands of
/// that slice. Update and delete commands never touch it: they are expected
/// to be fast and must not hide the list behind a spinner.
pub mod loading {
    use serde::{Deserialize, Serialize};

    /// Loading/error pair of a slice
    ///
    /// Invariant: `loading == true` implies at least one fetch is in flight
    /// and `error` is `None` (entering the pending state clears any prior
    /// error).
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LoadingStatus {
        /// Whether a fetch for this slice is in flight
        pub loading: bool,
        /// Message of the last failed fetch, cleared on the next pending
        pub error: Option<String>,
    }

    impl LoadingStatus {
        /// Creates an idle status with no error
        #[must_use]
        pub const fn idle() -> Self {
            Self {
                loading: false,
                error: None,
            }
        }

        /// Enter the pending state: loading set, prior error cleared
        pub fn begin(&mut self) {
            self.loading = true;
            self.error = None;
        }

        /// Leave the pending state successfully
        pub fn finish(&mut self) {
            self.loading = false;
        }

        /// Leave the pending state with an error message
        ///
        /// An empty message is replaced by `default` so the stored error is
        /// always human-readable.
        pub fn fail(&mut self, message: String, default: &str) {
            self.loading = false;
            self.error = Some(if message.is_empty() {
                default.to_string()
            } else {
                message
            });
        }

        /// Clear a stored error without touching `loading`
        pub fn clear_error(&mut self) {
            self.error = None;
        }
    }
}
