//! Users slice: the user list plus a single-record cache
//!
//! `selected_user` is an independently fetched copy of the user being
//! viewed, not a reference into `users`. An update echo is therefore
//! reconciled twice: deep-merged into the list entry (preserving nested
//! fields the edit form never touched) and shallow-merged into the selected
//! copy.

use crate::messages;
use placeadmin_client::model::{User, UserId, UserPatch};
use placeadmin_core::command::Lifecycle;
use placeadmin_core::loading::LoadingStatus;
use placeadmin_core::reducer::Reducer;
use serde::{Deserialize, Serialize};

/// State of the users slice
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersState {
    /// All fetched users, in server order
    pub users: Vec<User>,
    /// Independently fetched copy of the user being viewed
    pub selected_user: Option<User>,
    /// Fetch status; update commands never touch it
    pub status: LoadingStatus,
}

/// Events of the users slice
#[derive(Clone, Debug, PartialEq)]
pub enum UsersEvent {
    /// Lifecycle of a `fetchUsers` dispatch
    FetchUsers(Lifecycle<(), Vec<User>>),
    /// Lifecycle of a `fetchUser` dispatch
    FetchUser(Lifecycle<UserId, User>),
    /// Lifecycle of an `updateUser` dispatch; the fulfilment pairs the
    /// requested id with the server's partial echo
    UpdateUser(Lifecycle<UserId, (UserId, UserPatch)>),
    /// The view selected (or deselected) a user without a fetch
    SelectedUserSet(Option<User>),
    /// The view dismissed the stored fetch error
    ErrorCleared,
}

/// Reducer for the users slice
#[derive(Clone, Debug, Default)]
pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Event = UsersEvent;

    fn reduce(&self, state: &mut Self::State, event: Self::Event) {
        match event {
            UsersEvent::FetchUsers(Lifecycle::Pending { .. })
            | UsersEvent::FetchUser(Lifecycle::Pending { .. }) => state.status.begin(),

            UsersEvent::FetchUsers(Lifecycle::Fulfilled { value }) => {
                state.users = value;
                state.status.finish();
            }

            UsersEvent::FetchUser(Lifecycle::Fulfilled { value }) => {
                state.selected_user = Some(value);
                state.status.finish();
            }

            UsersEvent::FetchUsers(Lifecycle::Rejected { message })
            | UsersEvent::FetchUser(Lifecycle::Rejected { message }) => {
                state.status.fail(message, messages::FAILED_TO_FETCH_USERS);
            }

            UsersEvent::UpdateUser(Lifecycle::Fulfilled { value: (id, echo) }) => {
                if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
                    user.apply(&echo);
                }
                if let Some(selected) = &mut state.selected_user {
                    if selected.id == id {
                        selected.apply_shallow(&echo);
                    }
                }
            }

            // Update rejections surface only through the dispatch outcome;
            // the list stays visible and `loading` is untouched.
            UsersEvent::UpdateUser(Lifecycle::Pending { .. } | Lifecycle::Rejected { .. }) => {}

            UsersEvent::SelectedUserSet(user) => state.selected_user = user,

            UsersEvent::ErrorCleared => state.status.clear_error(),
        }
    }
}
