//! HTTP transport types and the executor seam.
//!
//! # Design
//! Requests and responses are plain data: the core builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the
//! network. The actual round-trip happens behind the `HttpExecute` trait,
//! which the composition root implements with whatever transport it likes
//! (the integration tests use reqwest). This separation keeps the core
//! deterministic and easy to test.

use async_trait::async_trait;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `PostClient::build_*` methods and handed to an `HttpExecute`
/// implementation for the actual round-trip.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by an `HttpExecute` implementation, then passed to
/// `PostClient::parse_*` methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one HTTP round-trip.
///
/// Implementations report connection and IO failures as
/// `ApiError::Transport`; non-2xx statuses are returned as data so the
/// client's parse methods can interpret them.
#[async_trait]
pub trait HttpExecute: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
