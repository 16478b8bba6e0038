//! # Validation Behavior
//!
//! 요청 타입에 등록된 모든 검증기를 실행하고, 실패가 하나라도 있으면
//! 핸들러를 호출하지 않고 [`AppError::Validation`]으로 파이프라인을 중단합니다.
//!
//! 검증 규칙 자체는 `validator` 크레이트의 `#[derive(Validate)]`로 선언하고,
//! [`collect_failures`]로 필드 단위 [`ValidationFailure`] 목록으로 변환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use validator::ValidationErrors;

use crate::core::errors::{AppError, AppResult, ValidationFailure};
use crate::core::pipeline::{Next, PipelineBehavior, Request};

/// 단일 요청 타입에 대한 동기 검증기
pub trait RequestValidator<R>: Send + Sync {
    /// 요청을 검증합니다. 성공 시 빈 목록을 반환합니다.
    fn validate(&self, request: &R) -> Vec<ValidationFailure>;
}

/// 등록된 검증기를 모두 실행하는 behavior
///
/// 검증기가 하나도 없으면 그대로 통과시킵니다.
/// 여러 검증기의 실패는 합쳐서 한 번에 보고됩니다.
pub struct ValidationBehavior<R> {
    validators: Vec<Arc<dyn RequestValidator<R>>>,
}

impl<R> ValidationBehavior<R> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: RequestValidator<R> + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }
}

impl<R> Default for ValidationBehavior<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Request> PipelineBehavior<R> for ValidationBehavior<R> {
    async fn handle(&self, request: R, next: Next<R>) -> AppResult<R::Response> {
        if self.validators.is_empty() {
            return next(request).await;
        }

        let failures: Vec<ValidationFailure> = self
            .validators
            .iter()
            .flat_map(|validator| validator.validate(&request))
            .collect();

        if !failures.is_empty() {
            warn!("🚫 {} 검증 실패: {}개 항목", R::NAME, failures.len());
            return Err(AppError::Validation(failures));
        }

        next(request).await
    }
}

/// `validator` 크레이트의 검증 결과를 필드 단위 실패 목록으로 변환합니다.
///
/// 필드 이름은 PascalCase 속성 이름(`display_name` → `DisplayName`)으로 노출됩니다.
/// 결과는 `field_order`에 적힌 선언 순서를 따르고, 목록에 없는 필드는 이름 순으로 뒤에 붙습니다.
/// 같은 필드의 메시지는 규칙 선언 순서를 유지합니다.
pub fn collect_failures(errors: &ValidationErrors, field_order: &[&str]) -> Vec<ValidationFailure> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| {
        let name: &str = field;
        let position = field_order
            .iter()
            .position(|declared| *declared == name)
            .unwrap_or(field_order.len());
        (position, name.to_string())
    });

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let property = property_name(&field);
            field_errors
                .iter()
                .map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("'{}' is invalid ({}).", property, error.code));
                    ValidationFailure::new(property.clone(), message)
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn property_name(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
