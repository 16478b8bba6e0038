//! # Mediator - 요청 타입별 파이프라인 레지스트리
//!
//! 요청 타입의 `TypeId`를 키로 합성된 [`Pipeline`]을 보관하고,
//! [`Mediator::send`]로 요청을 해당 파이프라인에 디스패치합니다.
//!
//! 전역 상태를 갖지 않으며, 애플리케이션 시작 시 한 번 구성된 뒤
//! `web::Data<Mediator>`로 핸들러에 주입됩니다.
//!
//! ```rust,ignore
//! let mediator = Mediator::new()
//!     .register(create_customer_pipeline)
//!     .register(get_customer_pipeline);
//!
//! let id = mediator.send(CreateCustomerCommand::new("John Doe", "john@example.com")).await?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;

use log::debug;

use crate::core::errors::{AppError, AppResult};
use crate::core::pipeline::{Pipeline, Request};

#[derive(Default)]
pub struct Mediator {
    pipelines: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 요청 타입에 대한 파이프라인을 등록합니다.
    ///
    /// 같은 요청 타입을 다시 등록하면 이전 파이프라인을 대체합니다.
    pub fn register<R: Request>(mut self, pipeline: Pipeline<R>) -> Self {
        debug!(
            "🔧 파이프라인 등록: {} (behavior {}개)",
            R::NAME,
            pipeline.behavior_count()
        );
        self.pipelines.insert(TypeId::of::<R>(), Box::new(pipeline));
        self
    }

    /// 요청을 등록된 파이프라인으로 디스패치합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidOperation` - 요청 타입에 대한 파이프라인이 등록되지 않은 경우
    /// * 파이프라인(behavior 또는 핸들러)이 반환한 모든 에러
    pub async fn send<R: Request>(&self, request: R) -> AppResult<R::Response> {
        let pipeline = self
            .pipelines
            .get(&TypeId::of::<R>())
            .and_then(|pipeline| pipeline.downcast_ref::<Pipeline<R>>())
            .ok_or_else(|| {
                AppError::InvalidOperation(format!(
                    "Handler was not found for request of type {}.",
                    R::NAME
                ))
            })?;

        pipeline.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::RequestHandler;
    use async_trait::async_trait;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Add(i64, i64);

    impl Request for Add {
        type Response = i64;
        const NAME: &'static str = "Add";
    }

    #[derive(Serialize)]
    struct Negate(i64);

    impl Request for Negate {
        type Response = i64;
        const NAME: &'static str = "Negate";
    }

    struct AddHandler;

    #[async_trait]
    impl RequestHandler<Add> for AddHandler {
        async fn handle(&self, request: Add) -> AppResult<i64> {
            Ok(request.0 + request.1)
        }
    }

    #[actix_web::test]
    async fn test_dispatches_to_registered_pipeline() {
        let mediator = Mediator::new().register(Pipeline::<Add>::builder().handler(AddHandler));

        assert_eq!(mediator.send(Add(2, 3)).await.unwrap(), 5);
    }

    #[actix_web::test]
    async fn test_unregistered_request_is_invalid_operation() {
        let mediator = Mediator::new().register(Pipeline::<Add>::builder().handler(AddHandler));

        match mediator.send(Negate(1)).await {
            Err(AppError::InvalidOperation(msg)) => assert!(msg.contains("Negate")),
            other => panic!("InvalidOperation이 발생해야 함: {:?}", other),
        }
    }
}
