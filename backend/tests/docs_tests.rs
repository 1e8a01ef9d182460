mod common;

use common::*;

use http::StatusCode;
use measure_backend::types::Environment;

#[tokio::test]
async fn test_openapi_schema_in_development() {
    let setup = TestSetup::new();

    let response = setup
        .send_get_request("/openapi.json")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["info"]["title"], "Body Measurement API");
    assert!(body["paths"]["/api/measure"]["post"].is_object());
    assert!(body["paths"]["/"]["get"].is_object());
}

#[tokio::test]
async fn test_openapi_schema_hidden_in_production() {
    let setup = TestSetup::with_environment(Environment::Production);

    let response = setup
        .send_get_request("/openapi.json")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_reference_in_staging() {
    let setup = TestSetup::with_environment(Environment::Staging);

    let response = setup
        .send_get_request("/docs")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_api_reference_hidden_in_production() {
    let setup = TestSetup::with_environment(Environment::Production);

    let response = setup
        .send_get_request("/docs")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Not found");
}
