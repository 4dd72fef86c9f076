//! # Placeadmin Testing
//!
//! Testing utilities for placeadmin reducers.
//!
//! The main export is [`ReducerTest`], a fluent Given-When-Then harness for
//! exercising a reducer without a runtime or a network: state in, events in,
//! assertions on the resulting state.
//!
//! ## Example
//!
//! ```ignore
//! use placeadmin_testing::ReducerTest;
//!
//! ReducerTest::new(TodosReducer)
//!     .given_state(TodosState::default())
//!     .when_event(TodosEvent::PageSet(3))
//!     .then_state(|state| {
//!         assert_eq!(state.pagination.current_page, 3);
//!     })
//!     .run();
//! ```


pub use reducer_test::ReducerTest;
