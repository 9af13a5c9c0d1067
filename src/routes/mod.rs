//! Router assembly.

mod common;
mod resources;

pub use common::common_routes;
pub use resources::resource_routes;

use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// The full service: resource routes, common routes and `/openapi.json`, with request
/// tracing and a body size limit of `body_limit` bytes.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(resource_routes(state))
        .route("/openapi.json", get(openapi_json))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
