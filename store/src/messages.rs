//! Default error messages surfaced to the view
//!
//! Transport errors occasionally render to an empty string; each slice
//! substitutes its default so the view never shows a blank notification.

/// Default message when listing or fetching users fails
pub const FAILED_TO_FETCH_USERS: &str = "Failed to fetch users";

/// Default message when fetching a user's posts fails
pub const FAILED_TO_FETCH_POSTS: &str = "Failed to fetch posts";

/// Default message when listing todos fails
pub const FAILED_TO_FETCH_TODOS: &str = "Failed to fetch tasks";

/// Default message when a user update is rejected
pub const FAILED_TO_UPDATE_USER: &str = "Failed to update user";

/// Default message when a post update is rejected
pub const FAILED_TO_UPDATE_POST: &str = "Failed to update post";

/// Default message when a post delete is rejected
pub const FAILED_TO_DELETE_POST: &str = "Failed to delete post";

/// Default message when a todo update is rejected
pub const FAILED_TO_UPDATE_TODO: &str = "Failed to update task status";
