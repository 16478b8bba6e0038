//! # Routes
//!
//! 모든 HTTP 라우트와 추출기(extractor) 설정을 등록합니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/health` | 상태 확인 (`Healthy`) |
//! | POST | `/api/v1/customers` | 고객 생성 |
//! | GET | `/api/v1/customers/{id}` | 고객 조회 |
//! | POST | `/api/auth/token` | 테스트 토큰 발급 |
//!
//! 고객 API는 URL 세그먼트로 버전을 표시하며 `v1`과 `v1.0`을 모두 허용합니다.
//! 그 외 버전은 라우트가 없으므로 404가 됩니다.

use actix_web::{web, HttpResponse};

use crate::core::errors::AppError;
use crate::handlers;

/// 고객 API가 응답하는 버전 접두사
pub const API_VERSION_PREFIXES: [&str; 2] = ["/api/v1", "/api/v1.0"];

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 잘못된 본문이나 경로 인자도 표준 에러 응답으로 변환
    cfg.app_data(json_config()).app_data(path_config());

    cfg.service(health_check);

    configure_customer_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_customer_routes(cfg: &mut web::ServiceConfig) {
    for prefix in API_VERSION_PREFIXES {
        cfg.service(
            web::scope(&format!("{}/customers", prefix))
                .service(handlers::customers::create_customer)
                .service(handlers::customers::get_customer),
        );
    }
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/auth").service(handlers::auth::issue_token));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Healthy")
}
