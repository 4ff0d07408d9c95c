//! The four asynchronous operations of the post store.
//!
//! # Design
//! Each operation mints a request id, dispatches `Started`, races the HTTP
//! round-trip against the caller's cancellation token, dispatches the
//! matching `Succeeded`/`Failed` event, and returns the result to the
//! caller. The reducer owns all state effects; this layer only produces
//! events and surfaces errors. No retries — one HTTP call per invocation.

use crate::action::{Action, EventKind, OperationEvent, OperationKind, RequestId};
use crate::cancel::CancelToken;
use crate::client::PostClient;
use crate::error::ApiError;
use crate::http::{HttpExecute, HttpRequest, HttpResponse};
use crate::store::SharedStore;
use crate::types::Post;

/// Issues operations against the blog API and dispatches their outcomes
/// into the shared store. Owned by the composition root alongside the store.
pub struct PostOps<E> {
    store: SharedStore,
    client: PostClient,
    http: E,
}

impl<E: HttpExecute> PostOps<E> {
    pub fn new(store: SharedStore, client: PostClient, http: E) -> Self {
        Self { store, client, http }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// GET /posts — refresh the whole local cache.
    pub async fn fetch_post_list(&self, cancel: CancelToken) -> Result<Vec<Post>, ApiError> {
        let request_id = RequestId::mint();
        self.dispatch_started(request_id, OperationKind::List).await;

        let request = self.client.build_fetch_post_list();
        let result = match self.round_trip(request, cancel).await {
            Ok(response) => self.client.parse_fetch_post_list(response),
            Err(e) => Err(e),
        };

        match &result {
            Ok(posts) => {
                self.dispatch(request_id, EventKind::ListSucceeded(posts.clone())).await;
            }
            Err(error) => {
                self.dispatch_failed(request_id, OperationKind::List, error).await;
            }
        }
        result
    }

    /// POST /posts — the server assigns the id.
    pub async fn add_post(&self, post: Post, cancel: CancelToken) -> Result<Post, ApiError> {
        let request_id = RequestId::mint();
        self.dispatch_started(request_id, OperationKind::Create).await;

        let result = match self.client.build_add_post(&post) {
            Ok(request) => match self.round_trip(request, cancel).await {
                Ok(response) => self.client.parse_add_post(response),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        match &result {
            Ok(created) => {
                self.dispatch(request_id, EventKind::CreateSucceeded(created.clone())).await;
            }
            Err(error) => {
                self.dispatch_failed(request_id, OperationKind::Create, error).await;
            }
        }
        result
    }

    /// DELETE /posts/{id} — the success event carries the input id, so the
    /// reducer removes the row the caller asked for rather than whatever
    /// the server echoed back.
    pub async fn delete_post(&self, post_id: &str, cancel: CancelToken) -> Result<Post, ApiError> {
        let request_id = RequestId::mint();
        self.dispatch_started(request_id, OperationKind::Delete).await;

        let request = self.client.build_delete_post(post_id);
        let result = match self.round_trip(request, cancel).await {
            Ok(response) => self.client.parse_delete_post(response),
            Err(e) => Err(e),
        };

        match &result {
            Ok(_) => {
                self.dispatch(
                    request_id,
                    EventKind::DeleteSucceeded { post_id: post_id.to_string() },
                )
                .await;
            }
            Err(error) => {
                self.dispatch_failed(request_id, OperationKind::Delete, error).await;
            }
        }
        result
    }

    /// PUT /posts/{id}.
    pub async fn update_post(
        &self,
        post_id: &str,
        post: Post,
        cancel: CancelToken,
    ) -> Result<Post, ApiError> {
        let request_id = RequestId::mint();
        self.dispatch_started(request_id, OperationKind::Update).await;

        let result = match self.client.build_update_post(post_id, &post) {
            Ok(request) => match self.round_trip(request, cancel).await {
                Ok(response) => self.client.parse_update_post(response),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        match &result {
            Ok(updated) => {
                self.dispatch(request_id, EventKind::UpdateSucceeded(updated.clone())).await;
            }
            Err(error) => {
                self.dispatch_failed(request_id, OperationKind::Update, error).await;
            }
        }
        result
    }

    /// Race the executor against the cancellation token. Cancellation goes
    /// through the normal rejection path, indistinguishable from any other
    /// failure as far as the reducer is concerned.
    async fn round_trip(
        &self,
        request: HttpRequest,
        mut cancel: CancelToken,
    ) -> Result<HttpResponse, ApiError> {
        let (method, path) = (request.method, request.path.clone());
        tokio::select! {
            _ = cancel.cancelled() => {
                log::debug!("{:?} {} cancelled by caller", method, path);
                Err(ApiError::Cancelled)
            }
            result = self.http.execute(request) => result,
        }
    }

    async fn dispatch(&self, request_id: RequestId, kind: EventKind) {
        self.store
            .write()
            .await
            .dispatch(Action::Operation(OperationEvent { request_id, kind }));
    }

    async fn dispatch_started(&self, request_id: RequestId, operation: OperationKind) {
        self.dispatch(request_id, EventKind::Started(operation)).await;
    }

    async fn dispatch_failed(&self, request_id: RequestId, operation: OperationKind, error: &ApiError) {
        self.dispatch(
            request_id,
            EventKind::Failed {
                operation,
                error: error.clone(),
            },
        )
        .await;
    }
}
