//! # Request Pipeline
//!
//! 커맨드/쿼리 디스패치를 감싸는 횡단 관심사(로깅, 검증) 체인입니다.
//!
//! 각 behavior는 요청과 continuation([`Next`])을 받아
//! (a) continuation을 호출하고 결과를 그대로 또는 가공하여 반환하거나,
//! (b) continuation을 호출하지 않고 즉시 실패를 반환할 수 있습니다.
//!
//! behavior 목록은 [`PipelineBuilder::handler`] 호출 시점(애플리케이션 시작 시)에
//! 오른쪽에서 왼쪽으로 접혀 하나의 호출 가능한 체인이 됩니다.
//! 목록의 첫 번째 behavior가 가장 바깥쪽에서 실행됩니다.
//!
//! ```text
//! LoggingBehavior ─▶ ValidationBehavior ─▶ Handler
//!        ◀────────────────────◀──────────────┘
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let pipeline = Pipeline::<CreateCustomerCommand>::builder()
//!     .behavior(LoggingBehavior)
//!     .behavior(ValidationBehavior::new().with_validator(CreateCustomerValidator))
//!     .handler(CreateCustomerHandler::new(repository));
//!
//! let id = pipeline.send(command).await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use serde::Serialize;

use crate::core::errors::AppResult;

/// 파이프라인을 통해 디스패치되는 요청(커맨드 또는 쿼리)
///
/// 요청과 응답 모두 로깅을 위해 직렬화 가능해야 합니다.
pub trait Request: Serialize + Send + Sync + 'static {
    /// 핸들러가 반환하는 응답 타입
    type Response: Serialize + Send + 'static;

    /// 로그에 표시되는 요청 이름
    const NAME: &'static str;
}

/// 다음 단계(다음 behavior 또는 최종 핸들러)를 호출하는 continuation
pub type Next<R> =
    Arc<dyn Fn(R) -> BoxFuture<'static, AppResult<<R as Request>::Response>> + Send + Sync>;

/// 요청 타입별 최종 핸들러
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> AppResult<R::Response>;
}

/// 핸들러 호출을 감싸는 횡단 관심사
#[async_trait]
pub trait PipelineBehavior<R: Request>: Send + Sync {
    /// 요청을 처리합니다.
    ///
    /// # Arguments
    ///
    /// * `request` - 처리할 요청
    /// * `next` - 체인의 나머지 부분. 호출하지 않으면 파이프라인이 중단됩니다.
    async fn handle(&self, request: R, next: Next<R>) -> AppResult<R::Response>;
}

/// behavior 체인과 핸들러가 하나로 합성된 파이프라인
pub struct Pipeline<R: Request> {
    chain: Next<R>,
    behavior_count: usize,
}

impl<R: Request> Pipeline<R> {
    pub fn builder() -> PipelineBuilder<R> {
        PipelineBuilder {
            behaviors: Vec::new(),
        }
    }

    /// 요청을 체인의 가장 바깥쪽 behavior부터 실행합니다.
    pub async fn send(&self, request: R) -> AppResult<R::Response> {
        (self.chain)(request).await
    }

    pub fn behavior_count(&self) -> usize {
        self.behavior_count
    }
}

/// [`Pipeline`] 생성기
///
/// behavior는 등록 순서대로 바깥에서 안쪽으로 실행됩니다.
pub struct PipelineBuilder<R: Request> {
    behaviors: Vec<Arc<dyn PipelineBehavior<R>>>,
}

impl<R: Request> PipelineBuilder<R> {
    pub fn behavior<B>(mut self, behavior: B) -> Self
    where
        B: PipelineBehavior<R> + 'static,
    {
        self.behaviors.push(Arc::new(behavior));
        self
    }

    /// 최종 핸들러를 지정하고 체인을 합성합니다.
    pub fn handler<H>(self, handler: H) -> Pipeline<R>
    where
        H: RequestHandler<R> + 'static,
    {
        let behavior_count = self.behaviors.len();
        let handler: Arc<dyn RequestHandler<R>> = Arc::new(handler);

        let terminal: Next<R> = Arc::new(
            move |request: R| -> BoxFuture<'static, AppResult<R::Response>> {
                let handler = Arc::clone(&handler);
                Box::pin(async move { handler.handle(request).await })
            },
        );

        let chain = self
            .behaviors
            .into_iter()
            .rev()
            .fold(terminal, |next: Next<R>, behavior| -> Next<R> {
                Arc::new(
                    move |request: R| -> BoxFuture<'static, AppResult<R::Response>> {
                        let behavior = Arc::clone(&behavior);
                        let next = Arc::clone(&next);
                        Box::pin(async move { behavior.handle(request, next).await })
                    },
                )
            });

        Pipeline {
            chain,
            behavior_count,
        }
    }
}
