//! 고객 관리 서비스
//!
//! 고객 생성/조회 API를 요청 파이프라인(로깅 → 검증 → 핸들러) 위에 구현한 서비스입니다.
//!
//! # Features
//!
//! - **고객 관리**: 고객 생성, 식별자로 조회
//! - **요청 파이프라인**: 시작 시점에 합성되는 behavior 체인
//! - **입력 검증**: `validator` 기반 필드 단위 검증, 실패 시 핸들러 미호출
//! - **표준 에러 응답**: 실패 종류별 고정 상태 코드와 `ErrorResponse` 본문
//! - **테스트 토큰**: HS256 JWT 발급
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 → 커맨드/쿼리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Mediator     │ ← Logging → Validation → Handler
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 인메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use customer_service::repositories::InMemoryCustomerRepository;
//! use customer_service::services::build_mediator;
//! use customer_service::domain::dto::CreateCustomerCommand;
//!
//! let mediator = build_mediator(Arc::new(InMemoryCustomerRepository::new()));
//! let id = mediator.send(CreateCustomerCommand::new("John Doe", "john.doe@example.com")).await?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
