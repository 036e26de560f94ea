//! HTTP Handlers
//!
//! Exposes pack list operations as the `/api/packing` REST resource.

mod packing;

use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::domain::DomainError;
use crate::AppState;

/// Error body sent with every non-2xx response
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

async fn trace_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(req).await;
    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/packing",
            get(packing::list_summaries).post(packing::create_list),
        )
        .route(
            "/api/packing/",
            get(packing::list_summaries).post(packing::create_list),
        )
        .route(
            "/api/packing/:id",
            get(packing::get_list)
                .put(packing::replace_list)
                .delete(packing::delete_list),
        )
        .layer(middleware::from_fn(trace_requests))
        .with_state(state)
}
