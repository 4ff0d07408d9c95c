//! The closed event vocabulary the reducer operates on.
//!
//! # Design
//! Instead of matching on action-name suffixes, every operation outcome is a
//! variant of `EventKind` and carries the `RequestId` minted for that
//! invocation. The generic loading-flag rules match on `phase()`; the
//! per-operation cache updates match on the concrete variant. Both kinds of
//! rule fire for the same event.

use std::fmt;

use uuid::Uuid;

use crate::error::ApiError;
use crate::types::Post;

/// Unique identifier minted once per operation invocation.
///
/// Used by the reducer to tell whether a completing operation is still the
/// most recently started one, or a stale leftover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The four asynchronous operations the store performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    List,
    Create,
    Delete,
    Update,
}

/// Lifecycle phase of an operation event, used by the generic reducer rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Started,
    Succeeded,
    Failed,
}

/// Outcome payload of an operation event.
///
/// `DeleteSucceeded` carries the *input* id rather than the response body:
/// the row to remove is identified by what the caller asked to delete, not
/// by what the server echoed back.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Started(OperationKind),
    ListSucceeded(Vec<Post>),
    CreateSucceeded(Post),
    DeleteSucceeded { post_id: String },
    UpdateSucceeded(Post),
    Failed { operation: OperationKind, error: ApiError },
}

/// One tagged outcome event produced by an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationEvent {
    pub request_id: RequestId,
    pub kind: EventKind,
}

impl OperationEvent {
    pub fn phase(&self) -> Phase {
        match self.kind {
            EventKind::Started(_) => Phase::Started,
            EventKind::ListSucceeded(_)
            | EventKind::CreateSucceeded(_)
            | EventKind::DeleteSucceeded { .. }
            | EventKind::UpdateSucceeded(_) => Phase::Succeeded,
            EventKind::Failed { .. } => Phase::Failed,
        }
    }

    pub fn operation(&self) -> OperationKind {
        match &self.kind {
            EventKind::Started(operation) | EventKind::Failed { operation, .. } => *operation,
            EventKind::ListSucceeded(_) => OperationKind::List,
            EventKind::CreateSucceeded(_) => OperationKind::Create,
            EventKind::DeleteSucceeded { .. } => OperationKind::Delete,
            EventKind::UpdateSucceeded(_) => OperationKind::Update,
        }
    }
}

/// Everything that can be dispatched to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// An outcome event from one of the four async operations.
    Operation(OperationEvent),
    /// Select the post with the given id for edit-form population.
    StartEditingPost(String),
    /// Drop the current edit selection.
    CancelEditingPost,
}
