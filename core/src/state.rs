//! Store state and the reducer that folds events into it.
//!
//! # Design
//! The reducer is a pure function over `(&mut StoreState, &Action)`; it is
//! the only place state transitions happen. Operation events go through two
//! independent passes: the per-operation cache update, then the generic
//! loading-flag rule. A completion whose request id no longer matches
//! `current_request_id` is stale — it leaves the loading flag untouched but
//! its cache update still applies.

use crate::action::{Action, EventKind, OperationEvent, Phase, RequestId};
use crate::types::Post;

/// The read model exposed to the UI layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    /// Local cache of all posts, in last-server-response order.
    pub post_list: Vec<Post>,
    /// The post currently selected for editing, if any.
    pub editing_post: Option<Post>,
    /// True iff the most recently started operation is still in flight.
    pub loading: bool,
    /// Request id whose completion should clear `loading`.
    pub current_request_id: Option<RequestId>,
}

/// Apply one action to the state.
pub fn reduce(state: &mut StoreState, action: &Action) {
    match action {
        Action::Operation(event) => {
            apply_operation_case(state, event);
            apply_lifecycle(state, event);
        }
        Action::StartEditingPost(post_id) => {
            state.editing_post = state.post_list.iter().find(|p| p.id == *post_id).cloned();
        }
        Action::CancelEditingPost => {
            state.editing_post = None;
        }
    }
}

/// Per-operation cache updates. Applied unconditionally, even for events
/// that are stale for loading-flag purposes.
fn apply_operation_case(state: &mut StoreState, event: &OperationEvent) {
    match &event.kind {
        EventKind::Started(_) | EventKind::Failed { .. } => {}
        EventKind::ListSucceeded(posts) => {
            state.post_list = posts.clone();
        }
        EventKind::CreateSucceeded(post) => {
            state.post_list.push(post.clone());
        }
        EventKind::DeleteSucceeded { post_id } => {
            if let Some(index) = state.post_list.iter().position(|p| p.id == *post_id) {
                state.post_list.remove(index);
            }
        }
        EventKind::UpdateSucceeded(post) => {
            if let Some(slot) = state.post_list.iter_mut().find(|p| p.id == post.id) {
                *slot = post.clone();
            }
            state.editing_post = None;
        }
    }
}

/// Generic loading-flag rule. Last-started wins: a newer `Started` simply
/// overwrites `current_request_id`, and the superseded operation's
/// completion is then ignored here.
fn apply_lifecycle(state: &mut StoreState, event: &OperationEvent) {
    match event.phase() {
        Phase::Started => {
            state.loading = true;
            state.current_request_id = Some(event.request_id);
        }
        Phase::Succeeded | Phase::Failed => {
            if state.loading && state.current_request_id == Some(event.request_id) {
                state.loading = false;
                state.current_request_id = None;
            } else {
                log::debug!(
                    "ignoring stale completion of {:?} (request {})",
                    event.operation(),
                    event.request_id
                );
            }
        }
    }
}
