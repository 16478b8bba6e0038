//! 요청 전후 로깅 behavior

use std::time::Instant;

use async_trait::async_trait;
use log::info;
use serde::Serialize;

use crate::core::errors::AppResult;
use crate::core::pipeline::{Next, PipelineBehavior, Request};

/// 요청 이름과 페이로드를 디스패치 전에, 응답을 디스패치 후에 기록합니다.
///
/// 파이프라인을 중단하지 않으며 하위 단계의 에러를 그대로 전파합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBehavior;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<직렬화 실패: {}>", e))
}

#[async_trait]
impl<R: Request> PipelineBehavior<R> for LoggingBehavior {
    async fn handle(&self, request: R, next: Next<R>) -> AppResult<R::Response> {
        info!("Handling {} {}", R::NAME, to_json(&request));
        let started = Instant::now();

        let response = next(request).await?;

        info!(
            "Handled {} {} ({:?})",
            R::NAME,
            to_json(&response),
            started.elapsed()
        );
        Ok(response)
    }
}
