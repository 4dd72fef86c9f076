//! Store facade: one observable state tree over the three slices
//!
//! [`AdminStore`] owns the runtime store and the transport adapter. Command
//! methods dispatch through the three-phase lifecycle and hand back a
//! [`CommandOutcome`] the view may await; synchronous events (filters, page
//! cursor, selection, error dismissal) are committed directly.

use crate::messages;
use crate::posts::{PostsEvent, PostsReducer, PostsState};
use crate::todos::{FilterUpdate, TodosEvent, TodosReducer, TodosState};
use crate::users::{UsersEvent, UsersReducer, UsersState};
use placeadmin_client::model::{PostId, PostPatch, TodoId, TodoPatch, User, UserId, UserPatch};
use placeadmin_client::{ApiClient, ApiError};
use placeadmin_core::command::CommandOutcome;
use placeadmin_core::reducer::Reducer;
use placeadmin_runtime::Store;
use tokio::sync::broadcast;

/// The whole state tree, composed under stable slice names
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Users slice
    pub users: UsersState,
    /// Posts slice
    pub posts: PostsState,
    /// Todos slice
    pub todos: TodosState,
}

/// Any event of any slice, in one total order
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// Event of the users slice
    Users(UsersEvent),
    /// Event of the posts slice
    Posts(PostsEvent),
    /// Event of the todos slice
    Todos(TodosEvent),
}

/// Reducer delegating each event to the owning slice
#[derive(Clone, Debug, Default)]
pub struct AppReducer {
    users: UsersReducer,
    posts: PostsReducer,
    todos: TodosReducer,
}

impl Reducer for AppReducer {
    type State = AppState;
    type Event = AppEvent;

    fn reduce(&self, state: &mut Self::State, event: Self::Event) {
        match event {
            AppEvent::Users(event) => self.users.reduce(&mut state.users, event),
            AppEvent::Posts(event) => self.posts.reduce(&mut state.posts, event),
            AppEvent::Todos(event) => self.todos.reduce(&mut state.todos, event),
        }
    }
}

/// The domain store the view talks to
///
/// Exposes reads of the state tree, a subscription to committed events, and
/// the commands of the three slices. All events, async lifecycles and
/// synchronous view events alike, are committed in one total order.
pub struct AdminStore {
    store: Store<AppReducer>,
    api: ApiClient,
}

impl AdminStore {
    /// Create a store against the public JSONPlaceholder service
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self::with_client(ApiClient::new()?))
    }

    /// Create a store against an explicit transport adapter
    #[must_use]
    pub fn with_client(api: ApiClient) -> Self {
        Self {
            store: Store::new(AppState::default(), AppReducer::default()),
            api,
        }
    }

    /// Read from the current state tree
    pub async fn state<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.store.state(f).await
    }

    /// Clone the whole state tree
    pub async fn snapshot(&self) -> AppState {
        self.store.snapshot().await
    }

    /// Subscribe to committed events, in commit order
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.store.subscribe()
    }

    // ========== Users commands ==========

    /// Fetch the full user list
    pub async fn fetch_users(&self) -> CommandOutcome {
        let api = self.api.clone();
        self.store
            .dispatch(
                (),
                move |()| async move { api.users().await },
                |lifecycle| AppEvent::Users(UsersEvent::FetchUsers(lifecycle)),
            )
            .await
    }

    /// Fetch one user into the selected-user cache
    pub async fn fetch_user(&self, id: UserId) -> CommandOutcome {
        let api = self.api.clone();
        self.store
            .dispatch(
                id,
                move |id| async move { api.user(id).await },
                |lifecycle| AppEvent::Users(UsersEvent::FetchUser(lifecycle)),
            )
            .await
    }

    /// Update a user and reconcile the server's echo into local state
    ///
    /// A rejection never touches the slice; it surfaces only through the
    /// returned outcome, with the slice default substituted for an empty
    /// message.
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> CommandOutcome {
        let api = self.api.clone();
        self.store
            .dispatch(
                id,
                move |id| async move { api.update_user(id, &patch).await.map(|echo| (id, echo)) },
                |lifecycle| AppEvent::Users(UsersEvent::UpdateUser(lifecycle)),
            )
            .await
            .or_default_message(messages::FAILED_TO_UPDATE_USER)
    }

    /// Select (or deselect) a user without a fetch
    pub async fn set_selected_user(&self, user: Option<User>) {
        self.store
            .commit(AppEvent::Users(UsersEvent::SelectedUserSet(user)))
            .await;
    }

    /// Dismiss the users slice's stored fetch error
    pub async fn clear_users_error(&self) {
        self.store
            .commit(AppEvent::Users(UsersEvent::ErrorCleared))
            .await;
    }

    // ========== Posts commands ==========

    /// Fetch the posts of one user, replacing the whole list
    pub async fn fetch_user_posts(&self, user_id: UserId) -> CommandOutcome {
        let api = self.api.clone();
        self.store
            .dispatch(
                user_id,
                move |user_id| async move { api.user_posts(user_id).await },
                |lifecycle| AppEvent::Posts(PostsEvent::FetchUserPosts(lifecycle)),
            )
            .await
    }

    /// Update a post and reconcile the server's echo into local state
    pub async fn update_post(&self, id: PostId, patch: PostPatch) -> CommandOutcome {
        let api = self.api.clone();
        self.store
            .dispatch(
                id,
                move |id| async move { api.update_post(id, &patch).await.map(|echo| (id, echo)) },
                |lifecycle| AppEvent::Posts(PostsEvent::UpdatePost(lifecycle)),
            )
            .await
            .or_default_message(messages::FAILED_TO_UPDATE_POST)
    }

    /// Delete a post
    ///
    /// The server answers with no payload; the command body returns the
    /// requested id so the reducer can locate the victim.
    pub async fn delete_post(&self, id: PostId) -> CommandOutcome {
        let api = self.api.clone();
        self.store
            .dispatch(
                id,
                move |id| async move { api.delete_post(id).await.map(|()| id) },
                |lifecycle| AppEvent::Posts(PostsEvent::DeletePost(lifecycle)),
            )
            .await
            .or_default_message(messages::FAILED_TO_DELETE_POST)
    }

    /// Dismiss the posts slice's stored fetch error
    pub async fn clear_posts_error(&self) {
        self.store
            .commit(AppEvent::Posts(PostsEvent::ErrorCleared))
            .await;
    }

    // ========== Todos commands ==========

    /// Fetch the global todo list and re-derive the projection
    pub async fn fetch_todos(&self) -> CommandOutcome {
        let api = self.api.clone();
        self.store
            .dispatch(
                (),
                move |()| async move { api.todos().await },
                |lifecycle| AppEvent::Todos(TodosEvent::FetchTodos(lifecycle)),
            )
            .await
    }

    /// Update a todo, reconcile the echo, and re-derive the projection
    pub async fn update_todo(&self, id: TodoId, patch: TodoPatch) -> CommandOutcome {
        let api = self.api.clone();
        self.store
            .dispatch(
                id,
                move |id| async move { api.update_todo(id, &patch).await.map(|echo| (id, echo)) },
                |lifecycle| AppEvent::Todos(TodosEvent::UpdateTodo(lifecycle)),
            )
            .await
            .or_default_message(messages::FAILED_TO_UPDATE_TODO)
    }

    /// Merge a partial filter change and reset the cursor to page 1
    pub async fn set_filters(&self, update: FilterUpdate) {
        tracing::debug!(?update, "applying filter change");
        self.store
            .commit(AppEvent::Todos(TodosEvent::FiltersSet(update)))
            .await;
    }

    /// Move the page cursor; filters and total are untouched
    pub async fn set_page(&self, page: usize) {
        self.store
            .commit(AppEvent::Todos(TodosEvent::PageSet(page)))
            .await;
    }

    /// Dismiss the todos slice's stored fetch error
    pub async fn clear_todos_error(&self) {
        self.store
            .commit(AppEvent::Todos(TodosEvent::ErrorCleared))
            .await;
    }
}
