//! # Placeadmin Client
//!
//! Transport adapter for the JSONPlaceholder REST service, plus the domain
//! records it decodes into.
//!
//! The remote service is read-mostly: writes are accepted and echoed back but
//! not durably applied. The adapter therefore treats every update response as
//! a *partial echo*, an arbitrary subset of the record, and the patch types
//! in [`model`] carry the explicit per-field merge rules the store uses to
//! reconcile an echo into local state.
//!
//! ## Example
//!
//! ```no_run
//! use placeadmin_client::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new()?;
//!     let users = client.users().await?;
//!     println!("{} users", users.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use client::ApiClient;
pub use error::ApiError;
pub use model::{
    Address, AddressPatch, Company, CompanyPatch, Geo, GeoPatch, Post, PostId, PostPatch, Todo,
    TodoId, TodoPatch, User, UserId, UserPatch,
};
