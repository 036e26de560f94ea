//! Packing API Client
//!
//! Frontend bindings to the packing REST API. Every update transmits a
//! complete list; there are no partial-update calls.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewPackList, PackList, PackListSummary};

pub use http::HttpPackingApi;

/// Failures surfaced by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The referenced list id does not exist in the store
    #[error("pack list {id} not found")]
    NotFound { id: String },
    /// Network failure or a 5xx from the server
    #[error("transport error: {0}")]
    Transport(String),
    /// The store rejected the request body
    #[error("invalid request: {0}")]
    Validation(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote operations on pack lists.
///
/// Futures are `?Send` because the browser fetch backend is single-threaded.
#[async_trait(?Send)]
pub trait PackingApi {
    /// GET /api/packing/
    async fn list_summaries(&self) -> ApiResult<Vec<PackListSummary>>;

    /// GET /api/packing/:id
    async fn fetch_by_id(&self, id: &str) -> ApiResult<PackList>;

    /// POST /api/packing
    async fn create(&self, list: &NewPackList) -> ApiResult<PackList>;

    /// PUT /api/packing/:id, full overwrite
    async fn replace_by_id(&self, id: &str, list: &PackList) -> ApiResult<()>;

    /// DELETE /api/packing/:id
    async fn delete_by_id(&self, id: &str) -> ApiResult<()>;
}
