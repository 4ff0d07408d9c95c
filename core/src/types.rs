//! Domain DTOs for the blog API.
//!
//! # Design
//! `Post` mirrors the mock-server's schema but is defined independently so
//! the core stays decoupled from Axum internals. Integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single blog post as stored by the API.
///
/// `id` is server-assigned; payloads sent to create may omit it, so it
/// defaults to the empty string on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub published: bool,
}
