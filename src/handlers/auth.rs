//! 토큰 발급 핸들러

use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::services::auth::TokenService;

/// 테스트 토큰 발급
///
/// ```json
/// { "access_token": "<header>.<payload>.<signature>" }
/// ```
#[post("/token")]
pub async fn issue_token(
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let response = token_service.issue_test_token()?;

    Ok(HttpResponse::Ok().json(response))
}
