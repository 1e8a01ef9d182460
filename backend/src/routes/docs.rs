//! Interactive API reference, mounted only where docs are visible

use aide::{axum::ApiRouter, openapi::OpenApi, scalar::Scalar};
use axum::{routing::get, Extension, Json};

use crate::types::Environment;

const OPENAPI_PATH: &str = "/openapi.json";
const REFERENCE_PATH: &str = "/docs";

/// Scalar UI and the raw OpenAPI document.
///
/// Empty for environments that hide API docs, so both paths fall through to
/// the JSON `404`.
pub fn handler(environment: &Environment) -> ApiRouter {
    if !environment.show_api_docs() {
        return ApiRouter::new();
    }

    let reference = Scalar::new(OPENAPI_PATH).with_title("Body Measurement API Reference");

    ApiRouter::new()
        .route(REFERENCE_PATH, reference.axum_route())
        .route(OPENAPI_PATH, get(openapi_document))
}

#[allow(clippy::unused_async)]
async fn openapi_document(Extension(openapi): Extension<OpenApi>) -> Json<OpenApi> {
    Json(openapi)
}
