//! # Placeadmin Store
//!
//! The client-side domain store of the placeadmin UI.
//!
//! Three slices (users, posts, and todos) are composed under one state
//! tree and driven through a uniform command lifecycle by the runtime. The
//! view layer reads the tree, dispatches commands, and subscribes to
//! committed events; it never mutates state directly.
//!
//! ## Slices
//!
//! - [`users`]: the user list plus a single-record cache of the user being
//!   viewed, with deep-merge reconciliation of update echoes
//! - [`posts`]: the posts of the one user currently viewed, with update and
//!   delete
//! - [`todos`]: the global todo list plus the derived filter + pagination
//!   projection the table renders
//!
//! ## Example
//!
//! ```no_run
//! use placeadmin_store::AdminStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = AdminStore::new()?;
//!
//!     let outcome = store.fetch_todos().await;
//!     if let Some(message) = outcome.message() {
//!         eprintln!("{message}");
//!     }
//!
//!     let visible = store.state(|s| s.todos.page_window().to_vec()).await;
//!     println!("{} todos on this page", visible.len());
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod messages;
pub mod posts;
pub mod todos;
pub mod users;

// Re-export main types for convenience
pub use app::{AdminStore, AppEvent, AppReducer, AppState};
pub use placeadmin_core::command::CommandOutcome;
pub use posts::{PostsEvent, PostsReducer, PostsState};
pub use todos::{
    FilterUpdate, Pagination, StatusFilter, TodoFilters, TodosEvent, TodosReducer, TodosState,
};
pub use users::{UsersEvent, UsersReducer, UsersState};
