//! Posts slice: the posts of the one user currently viewed
//!
//! `fetchUserPosts` replaces the whole list, so the slice never holds posts
//! of two users at once (modulo overlapping fetches, which are
//! last-writer-wins).

use crate::messages;
use placeadmin_client::model::{Post, PostId, PostPatch, UserId};
use placeadmin_core::command::Lifecycle;
use placeadmin_core::loading::LoadingStatus;
use placeadmin_core::reducer::Reducer;
use serde::{Deserialize, Serialize};

/// State of the posts slice
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsState {
    /// Posts of the currently viewed user, in server order
    pub posts: Vec<Post>,
    /// Fetch status; update and delete commands never touch it
    pub status: LoadingStatus,
}

/// Events of the posts slice
#[derive(Clone, Debug, PartialEq)]
pub enum PostsEvent {
    /// Lifecycle of a `fetchUserPosts` dispatch
    FetchUserPosts(Lifecycle<UserId, Vec<Post>>),
    /// Lifecycle of an `updatePost` dispatch; the fulfilment pairs the
    /// requested id with the server's partial echo
    UpdatePost(Lifecycle<PostId, (PostId, PostPatch)>),
    /// Lifecycle of a `deletePost` dispatch; the server answers with no
    /// payload, so the command body returns the requested id
    DeletePost(Lifecycle<PostId, PostId>),
    /// The view dismissed the stored fetch error
    ErrorCleared,
}

/// Reducer for the posts slice
#[derive(Clone, Debug, Default)]
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Event = PostsEvent;

    fn reduce(&self, state: &mut Self::State, event: Self::Event) {
        match event {
            PostsEvent::FetchUserPosts(Lifecycle::Pending { .. }) => state.status.begin(),

            PostsEvent::FetchUserPosts(Lifecycle::Fulfilled { value }) => {
                state.posts = value;
                state.status.finish();
            }

            PostsEvent::FetchUserPosts(Lifecycle::Rejected { message }) => {
                state.status.fail(message, messages::FAILED_TO_FETCH_POSTS);
            }

            PostsEvent::UpdatePost(Lifecycle::Fulfilled { value: (id, echo) }) => {
                if let Some(post) = state.posts.iter_mut().find(|p| p.id == id) {
                    post.apply(&echo);
                }
            }

            PostsEvent::DeletePost(Lifecycle::Fulfilled { value: id }) => {
                // Deleting an absent id is a no-op, not an error.
                state.posts.retain(|post| post.id != id);
            }

            // Update/delete rejections surface only through the dispatch
            // outcome; the list stays visible.
            PostsEvent::UpdatePost(Lifecycle::Pending { .. } | Lifecycle::Rejected { .. })
            | PostsEvent::DeletePost(Lifecycle::Pending { .. } | Lifecycle::Rejected { .. }) => {}

            PostsEvent::ErrorCleared => state.status.clear_error(),
        }
    }
}
