//! The state handle owned by the UI composition root.
//!
//! No global singleton: whoever composes the app constructs a `PostStore`
//! (usually wrapped in `SharedStore` so concurrent operations can dispatch
//! into it) and passes it down.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::action::Action;
use crate::state::{reduce, StoreState};

/// Holds the store state and funnels every mutation through the reducer.
#[derive(Debug, Default)]
pub struct PostStore {
    state: StoreState,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch: {action:?}");
        reduce(&mut self.state, &action);
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }
}

/// Store shared between the UI layer and in-flight operations.
pub type SharedStore = Arc<RwLock<PostStore>>;

pub fn shared_store() -> SharedStore {
    Arc::new(RwLock::new(PostStore::new()))
}
