//! Todos slice: the global todo list and its filter + pagination pipeline
//!
//! The view never reads `todos` directly; it renders the derived projection
//! `(filtered_todos, pagination.total)` plus the current page window. The
//! projection is recomputed on every mutation of the list (fetch, update)
//! and on every filter change, so the two derived fields are always
//! consistent with `todos` and `filters`.

use crate::messages;
use placeadmin_client::model::{Todo, TodoId, TodoPatch, UserId};
use placeadmin_core::command::Lifecycle;
use placeadmin_core::loading::LoadingStatus;
use placeadmin_core::reducer::Reducer;
use serde::{Deserialize, Serialize};

/// Fixed number of todos per page
pub const PAGE_SIZE: usize = 10;

/// Completion filter exposed to the view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every todo passes
    #[default]
    All,
    /// Only completed todos pass
    Completed,
    /// Only todos not yet completed pass
    Pending,
}

impl StatusFilter {
    /// Whether a todo passes this filter
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Completed => todo.completed,
            Self::Pending => !todo.completed,
        }
    }
}

/// The active filter specification
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFilters {
    /// Completion predicate
    pub status: StatusFilter,
    /// Title substring, matched case-insensitively; empty passes everything
    pub title: String,
    /// Owner predicate; `None` passes everything
    pub user_id: Option<UserId>,
}

impl TodoFilters {
    /// Whether a todo passes all three predicates
    #[must_use]
    pub fn matches(&self, todo: &Todo) -> bool {
        let status_match = self.status.matches(todo);

        let title_match = self.title.is_empty()
            || todo
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase());

        let user_match = self.user_id.is_none_or(|user_id| todo.user_id == user_id);

        status_match && title_match && user_match
    }
}

/// Partial filter change, merged into the active [`TodoFilters`]
///
/// Each field uses an unset sentinel: `None` leaves the active value
/// unchanged. The owner filter is doubly optional so it can be cleared
/// (`Some(None)`) as well as set (`Some(Some(id))`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    /// New completion predicate, if set
    pub status: Option<StatusFilter>,
    /// New title substring, if set
    pub title: Option<String>,
    /// New owner predicate, if set
    pub user_id: Option<Option<UserId>>,
}

/// Page cursor over the filtered list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page the view shows
    pub current_page: usize,
    /// Fixed page size
    pub page_size: usize,
    /// Number of todos passing the active filters
    pub total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PAGE_SIZE,
            total: 0,
        }
    }
}

impl Pagination {
    /// Number of pages under the current total (zero when the list is empty)
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }
}

/// State of the todos slice
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosState {
    /// All fetched todos, in server order
    pub todos: Vec<Todo>,
    /// Ordered subsequence of `todos` passing the active filters
    pub filtered_todos: Vec<Todo>,
    /// Active filter specification
    pub filters: TodoFilters,
    /// Page cursor over `filtered_todos`
    pub pagination: Pagination,
    /// Fetch status; update commands never touch it
    pub status: LoadingStatus,
}

impl TodosState {
    /// The visible page window of the filtered list
    ///
    /// Empty when `current_page` points past the end; the cursor is not
    /// self-correcting, navigation is the view's job.
    #[must_use]
    pub fn page_window(&self) -> &[Todo] {
        let start = (self.pagination.current_page.saturating_sub(1)) * self.pagination.page_size;
        if start >= self.filtered_todos.len() {
            return &[];
        }
        let end = (start + self.pagination.page_size).min(self.filtered_todos.len());
        &self.filtered_todos[start..end]
    }

    /// Recompute the derived projection from `todos` and `filters`
    ///
    /// Leaves `current_page` alone; only a filter change resets the cursor.
    fn reproject(&mut self) {
        self.filtered_todos = apply_filters(&self.todos, &self.filters);
        self.pagination.total = self.filtered_todos.len();
    }
}

/// The ordered subsequence of `todos` passing all predicates of `filters`
#[must_use]
pub fn apply_filters(todos: &[Todo], filters: &TodoFilters) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filters.matches(todo))
        .cloned()
        .collect()
}

/// Events of the todos slice
#[derive(Clone, Debug, PartialEq)]
pub enum TodosEvent {
    /// Lifecycle of a `fetchTodos` dispatch
    FetchTodos(Lifecycle<(), Vec<Todo>>),
    /// Lifecycle of an `updateTodo` dispatch; the fulfilment pairs the
    /// requested id with the server's partial echo
    UpdateTodo(Lifecycle<TodoId, (TodoId, TodoPatch)>),
    /// The view changed the filters; resets the cursor to page 1
    FiltersSet(FilterUpdate),
    /// The view moved the page cursor; touches nothing else
    PageSet(usize),
    /// The view dismissed the stored fetch error
    ErrorCleared,
}

/// Reducer for the todos slice
#[derive(Clone, Debug, Default)]
pub struct TodosReducer;

impl Reducer for TodosReducer {
    type State = TodosState;
    type Event = TodosEvent;

    fn reduce(&self, state: &mut Self::State, event: Self::Event) {
        match event {
            TodosEvent::FetchTodos(Lifecycle::Pending { .. }) => state.status.begin(),

            TodosEvent::FetchTodos(Lifecycle::Fulfilled { value }) => {
                state.todos = value;
                state.reproject();
                state.status.finish();
            }

            TodosEvent::FetchTodos(Lifecycle::Rejected { message }) => {
                state.status.fail(message, messages::FAILED_TO_FETCH_TODOS);
            }

            TodosEvent::UpdateTodo(Lifecycle::Fulfilled { value: (id, echo) }) => {
                if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
                    todo.apply(&echo);
                }
                state.reproject();
            }

            // Update rejections surface only through the dispatch outcome.
            TodosEvent::UpdateTodo(Lifecycle::Pending { .. } | Lifecycle::Rejected { .. }) => {}

            TodosEvent::FiltersSet(update) => {
                if let Some(status) = update.status {
                    state.filters.status = status;
                }
                if let Some(title) = update.title {
                    state.filters.title = title;
                }
                if let Some(user_id) = update.user_id {
                    state.filters.user_id = user_id;
                }
                state.reproject();
                state.pagination.current_page = 1;
            }

            TodosEvent::PageSet(page) => state.pagination.current_page = page,

            TodosEvent::ErrorCleared => state.status.clear_error(),
        }
    }
}
