use axum::{body::Body, http::Request, response::Response, Router};
use measure_backend::{server, types::Environment};
use tower::ServiceExt;

use super::utils::MultipartBody;

/// Setup test environment with logging enabled
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup wrapping the fully layered router
pub struct TestSetup {
    pub router: Router,
    pub environment: Environment,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_environment(Environment::Development {
            request_timeout_override: None,
        })
    }

    pub fn with_environment(environment: Environment) -> Self {
        setup_test_env();

        let router = server::app(&environment);

        Self {
            router,
            environment,
        }
    }

    pub async fn send_request(
        &self,
        request: Request<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_multipart_request(
        &self,
        route: &str,
        body: MultipartBody,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let (content_type, bytes) = body.finish();
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", content_type)
            .body(Body::from(bytes))?;

        self.send_request(request).await
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        self.send_request(request).await
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;

        self.send_request(request).await
    }

    pub async fn send_options_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("OPTIONS")
            .header("Origin", "https://example.com")
            .header("Access-Control-Request-Method", "POST")
            .body(Body::empty())?;

        self.send_request(request).await
    }
}
