//! 고객 API 핸들러
//!
//! 요청을 커맨드/쿼리로 바꿔 [`Mediator`]에 전달하기만 합니다.
//! 검증, 로깅, 에러 변환은 파이프라인과 `AppError`가 담당합니다.

use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::core::Mediator;
use crate::domain::dto::{CreateCustomerCommand, GetCustomerByIdQuery};

/// 고객 생성
///
/// 성공 시 `200 OK`와 JSON 문자열로 직렬화된 새 식별자를 반환합니다.
///
/// # Errors
///
/// * `400 Bad Request` - 검증 실패 또는 잘못된 본문
#[post("")]
pub async fn create_customer(
    mediator: web::Data<Mediator>,
    payload: web::Json<CreateCustomerCommand>,
) -> Result<HttpResponse, AppError> {
    let id = mediator.send(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(id))
}

/// 식별자로 고객 조회
///
/// # Errors
///
/// * `400 Bad Request` - 식별자가 UUID 형식이 아닌 경우
/// * `404 Not Found` - 고객이 없는 경우
#[get("/{id}")]
pub async fn get_customer(
    mediator: web::Data<Mediator>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let customer = mediator
        .send(GetCustomerByIdQuery::new(id.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(customer))
}
