//! # Application Error Handling System
//!
//! 고객 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 실패는 닫힌 집합의 [`AppError`] 열거형으로 표현되고,
//! HTTP 경계에서 단 한 번 [`translate`]를 거쳐 상태 코드와 [`ErrorResponse`]로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | message |
//! |----------|-------------|---------|
//! | `Validation` | 400 Bad Request | `Validation failed.` |
//! | `NotFound` | 404 Not Found | `Resource not found.` |
//! | `BadRequest` | 400 Bad Request | `Bad request.` |
//! | `Forbidden` | 403 Forbidden | `Access forbidden.` |
//! | `Conflict` | 409 Conflict | `Conflict occurred.` |
//! | `Unauthorized` | 401 Unauthorized | `Unauthorized access.` |
//! | `InvalidOperation` | 400 Bad Request | `Invalid operation.` |
//! | `Internal` | 500 Internal Server Error | `An internal server error occurred.` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(&self, id: Uuid) -> AppResult<CustomerDto> {
//!     let customer = self.repository.get_by_id(id).await?
//!         .ok_or_else(|| AppError::not_found(Customer::ENTITY_NAME, id))?;
//!     Ok(CustomerDto::from(customer))
//! }
//! ```
//!
//! 핸들러와 서비스는 에러를 잡지 않고 `?`로 전파하며,
//! 상태 코드는 오직 이 모듈에서만 결정됩니다.

use std::collections::BTreeMap;
use std::fmt::Display;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{SecondsFormat, Utc};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 필드 단위 검증 실패
///
/// 하나의 규칙 위반을 나타내며, 여러 개가 모여 [`AppError::Validation`]을 구성합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// 실패한 속성 이름 (예: `Name`, `Email`)
    pub field_name: String,
    /// 사람이 읽을 수 있는 실패 사유
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 변환기가 인식하는 실패 종류의 닫힌 집합입니다. 각 변형은 정확히 하나의
/// HTTP 상태 코드에 대응하며, [`translate`]에서 전수 매칭됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // 검증 실패 (파이프라인의 ValidationBehavior가 생성)
/// return Err(AppError::Validation(failures));
///
/// // 엔티티 없음
/// repository.get_by_id(id).await?
///     .ok_or_else(|| AppError::not_found("Customer", id))?;
///
/// // 외부 라이브러리 에러
/// lock.write().context("고객 저장소 쓰기 잠금 실패")?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패
    ///
    /// 하나 이상의 [`ValidationFailure`]를 담고 있으며 400 Bad Request로 응답됩니다.
    /// 이 에러가 발생하면 요청은 핸들러에 도달하지 않습니다.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationFailure>),

    /// 요청한 엔티티가 존재하지 않음
    ///
    /// 엔티티 이름과 조회 키를 보존하며 404 Not Found로 응답됩니다.
    #[error("Entity \"{entity}\" ({key}) was not found.")]
    NotFound { entity: String, key: String },

    /// 잘못된 요청 (파싱 불가한 본문, 잘못된 경로 인자 등)
    #[error("{0}")]
    BadRequest(String),

    /// 권한 부족
    #[error("{0}")]
    Forbidden(String),

    /// 비즈니스 규칙 충돌
    #[error("{0}")]
    Conflict(String),

    /// 인증 실패
    #[error("{0}")]
    Unauthorized(String),

    /// 현재 상태에서 수행할 수 없는 작업
    ///
    /// 등록되지 않은 요청 타입을 디스패치하는 경우에도 사용됩니다.
    #[error("{0}")]
    InvalidOperation(String),

    /// 분류되지 않은 내부 오류
    ///
    /// 500 Internal Server Error로 응답되며 원본 메시지가 `details`에 담깁니다.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// 엔티티 없음 에러를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `entity` - 엔티티 이름 (예: `"Customer"`)
    /// * `key` - 조회에 사용한 식별자
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let err = AppError::not_found("Customer", id);
    /// assert_eq!(err.to_string(), format!("Entity \"Customer\" ({}) was not found.", id));
    /// ```
    pub fn not_found(entity: impl Into<String>, key: impl Display) -> Self {
        AppError::NotFound {
            entity: entity.into(),
            key: key.to_string(),
        }
    }
}

fn join_messages(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// 필드 이름별로 메시지를 묶고 `"; "`로 연결합니다.
fn group_by_field(failures: &[ValidationFailure]) -> BTreeMap<String, String> {
    let mut grouped: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for failure in failures {
        grouped
            .entry(failure.field_name.clone())
            .or_default()
            .push(failure.message.as_str());
    }

    grouped
        .into_iter()
        .map(|(field, messages)| (field, messages.join("; ")))
        .collect()
}

/// 클라이언트에 반환되는 표준 에러 응답 본문
///
/// ```json
/// {
///   "statusCode": 400,
///   "message": "Validation failed.",
///   "details": "The length of 'Name' must be at least 3 characters. You entered 0 characters.",
///   "errors": { "Name": "..." },
///   "timestamp": "2024-01-01T00:00:00.000000Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub details: Option<String>,
    pub errors: Option<BTreeMap<String, String>>,
    pub timestamp: String,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: &str, details: Option<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.to_string(),
            details,
            errors: None,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// 실패를 HTTP 상태 코드와 에러 응답 본문으로 변환합니다.
///
/// 상태를 갖지 않는 순수 함수이며, 실패 종류를 전수 매칭합니다.
/// 검증 실패는 필드별 메시지 맵을 추가로 포함하고,
/// 그 외의 모든 실패는 원본 메시지를 `details`로 전달합니다.
pub fn translate(error: &AppError) -> (StatusCode, ErrorResponse) {
    let status = status(error);

    let response = match error {
        AppError::Validation(failures) => {
            let mut response =
                ErrorResponse::new(status, "Validation failed.", Some(join_messages(failures)));
            response.errors = Some(group_by_field(failures));
            response
        }
        _ => ErrorResponse::new(status, public_message(error), Some(error.to_string())),
    };

    (status, response)
}

/// 실패 종류별 HTTP 상태 코드
pub fn status(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation(_) | AppError::BadRequest(_) | AppError::InvalidOperation(_) => {
            StatusCode::BAD_REQUEST
        }
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        AppError::Conflict(_) => StatusCode::CONFLICT,
        AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &AppError) -> &'static str {
    match error {
        AppError::Validation(_) => "Validation failed.",
        AppError::NotFound { .. } => "Resource not found.",
        AppError::BadRequest(_) => "Bad request.",
        AppError::Forbidden(_) => "Access forbidden.",
        AppError::Conflict(_) => "Conflict occurred.",
        AppError::Unauthorized(_) => "Unauthorized access.",
        AppError::InvalidOperation(_) => "Invalid operation.",
        AppError::Internal(_) => "An internal server error occurred.",
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        status(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// actix-web이 실패한 요청마다 정확히 한 번 호출하며,
    /// 5xx는 `error`, 4xx는 `warn` 레벨로 기록합니다.
    fn error_response(&self) -> HttpResponse {
        let (status, body) = translate(self);

        if status.is_server_error() {
            error!("❌ 처리되지 않은 오류 발생 [{}]: {}", status.as_u16(), self);
        } else {
            warn!("⚠️ 요청 처리 실패 [{}]: {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 [`AppError::Internal`]로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let customers = self.customers.read().context("고객 저장소 읽기 잠금 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Internal(format!("{}: {}", msg, e)))
    }
}
