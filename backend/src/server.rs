use aide::openapi::{Info, OpenApi};
use axum::{extract::DefaultBodyLimit, Extension, Router};
use datadog_tracing::axum::{shutdown_signal, OtelAxumLayer, OtelInResponseLayer};
use tokio::net::TcpListener;

use crate::middleware::allow_any_origin;
use crate::routes;
use crate::types::Environment;
use crate::upload::MAX_BODY_SIZE;

/// Port used when `PORT` is not set
const DEFAULT_PORT: u16 = 3000;

/// Builds the application router with every layer applied
pub fn app(environment: &Environment) -> Router {
    let mut openapi = OpenApi {
        info: Info {
            title: "Body Measurement API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Info::default()
        },
        ..OpenApi::default()
    };

    let request_timeout = environment.request_timeout();

    routes::handler(environment)
        .finish_api(&mut openapi)
        .fallback(routes::not_found)
        .layer(Extension(openapi))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        // Include trace context as header into the response
        .layer(OtelInResponseLayer)
        // Start OpenTelemetry trace on incoming request
        .layer(OtelAxumLayer::default())
        .layer(tower_http::timeout::TimeoutLayer::new(request_timeout))
        .layer(axum::middleware::from_fn(allow_any_origin))
}

/// Starts the server with the given environment
///
/// # Errors
///
/// Returns an error if `PORT` is invalid or the server fails to bind to it
pub async fn start(environment: &Environment) -> anyhow::Result<()> {
    let router = app(environment);

    let addr = std::net::SocketAddr::from((
        [0, 0, 0, 0],
        std::env::var("PORT").map_or(Ok(DEFAULT_PORT), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Body measurement API listening on port {}", addr.port());

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}
