mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use common::{TestState, TEST_AUDIENCE, TEST_ISSUER, TEST_SECRET};
use customer_service::domain::dto::TokenResponse;
use customer_service::domain::models::TokenClaims;

#[actix_web::test]
async fn test_issue_token_returns_signed_jwt() {
    let state = TestState::new();
    let app = test::init_service(App::new().configure(state.configure())).await;

    let req = test::TestRequest::post().uri("/api/auth/token").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenResponse = test::read_body_json(resp).await;
    assert_eq!(body.access_token.split('.').count(), 3);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[TEST_ISSUER]);
    validation.set_audience(&[TEST_AUDIENCE]);
    let decoded = decode::<TokenClaims>(
        &body.access_token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &validation,
    )
    .unwrap();
    assert!(decoded.claims.exp > decoded.claims.iat);
}

#[actix_web::test]
async fn test_consecutive_tokens_differ() {
    let state = TestState::new();
    let app = test::init_service(App::new().configure(state.configure())).await;

    let first: TokenResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post().uri("/api/auth/token").to_request(),
    )
    .await;
    let second: TokenResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post().uri("/api/auth/token").to_request(),
    )
    .await;

    assert_ne!(first.access_token, second.access_token);
}
