//! # HTTP Handlers
//!
//! actix-web 라우트 핸들러입니다. 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 표준 에러 응답으로 변환됩니다.

pub mod auth;
pub mod customers;
