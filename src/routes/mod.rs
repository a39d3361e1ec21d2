//! Router assembly and cross-cutting response headers.

pub mod api;
pub mod common;

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Headers the trivia frontend expects on every response, errors included.
async fn after_request(req: Request, next: Next) -> Response {
    let mut res = next.run(req).await;
    let headers = res.headers_mut();
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Authorization,true"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,PATCH,POST,DELETE,OPTIONS"),
    );
    res
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".into())
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// The full application: trivia routes, operational routes, envelope
/// fallbacks for unknown paths, permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common::common_routes(state.clone()))
        .merge(api::trivia_routes(state))
        .fallback(not_found)
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(after_request))
}
