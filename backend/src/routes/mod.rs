mod docs;
mod health;
mod measure;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};
use axum::response::IntoResponse;

use crate::types::{AppError, Environment};

/// Creates the router with all handler routes
pub fn handler(environment: &Environment) -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler(environment))
        .api_route("/", get(health::handler))
        .api_route("/api/measure", post(measure::handler))
}

/// JSON `404` for every path without a route
#[allow(clippy::unused_async)]
pub async fn not_found() -> impl IntoResponse {
    AppError::not_found()
}
