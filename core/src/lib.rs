//! Client-side state container for the blog post resource.
//!
//! # Overview
//! Four async CRUD operations (list, create, delete, update) issue HTTP
//! calls through a pluggable executor and dispatch tagged outcome events
//! into a single reducer, which maintains the post cache, the current edit
//! selection, and an in-flight loading flag keyed by request id.
//!
//! # Design
//! - `PostClient` is stateless and sans-IO: `build_*` produces a request,
//!   `parse_*` consumes a response, and the round-trip in between happens
//!   behind the `HttpExecute` trait.
//! - All state lives in `StoreState` and is mutated only by the reducer;
//!   `PostStore` is an explicit handle with no process-wide singleton.
//! - Every operation invocation mints a `RequestId`; the loading flag
//!   tracks the most recently started operation and ignores stale
//!   completions.
//! - Cancellation is cooperative: callers keep a `CancelHandle` and thread
//!   the paired `CancelToken` into the operation.

pub mod action;
pub mod cancel;
pub mod client;
pub mod error;
pub mod http;
pub mod ops;
pub mod state;
pub mod store;
pub mod types;

pub use action::{Action, EventKind, OperationEvent, OperationKind, Phase, RequestId};
pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use client::PostClient;
pub use error::ApiError;
pub use http::{HttpExecute, HttpMethod, HttpRequest, HttpResponse};
pub use ops::PostOps;
pub use state::{reduce, StoreState};
pub use store::{shared_store, PostStore, SharedStore};
pub use types::Post;
