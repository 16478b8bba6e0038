//! # Core Framework Module
//!
//! 고객 서비스의 요청 처리 골격을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`pipeline`] - 요청 파이프라인
//! - **Request**: 커맨드/쿼리 공통 trait
//! - **PipelineBehavior**: 요청과 continuation을 받는 횡단 관심사
//! - **Pipeline**: 시작 시점에 합성되는 behavior 체인 + 핸들러
//!
//! ### [`behaviors`] - 기본 behavior
//! - **LoggingBehavior**: 요청/응답 로깅
//! - **ValidationBehavior**: 검증 실패 시 파이프라인 중단
//!
//! ### [`mediator`] - 디스패처
//! - **Mediator**: 요청 타입별 파이프라인 레지스트리
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 닫힌 실패 종류 집합
//! - **translate**: 실패 → HTTP 상태 코드 + `ErrorResponse`
//!
//! ## 요청 흐름
//!
//! ```text
//! HTTP 핸들러
//!   └─ Mediator::send(request)
//!        └─ LoggingBehavior (before)
//!             └─ ValidationBehavior ──(실패)──▶ AppError::Validation
//!                  └─ RequestHandler
//!        ◀─ LoggingBehavior (after)
//!   ◀─ AppError → ResponseError::error_response (translate)
//! ```

pub mod behaviors;
pub mod errors;
pub mod mediator;
pub mod pipeline;

pub use errors::{AppError, AppResult, ErrorContext, ErrorResponse, ValidationFailure};
pub use mediator::Mediator;
pub use pipeline::{Next, Pipeline, PipelineBehavior, Request, RequestHandler};
