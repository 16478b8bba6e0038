//! # Domain Layer Module
//!
//! 고객 서비스의 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (Customer)
//! ├── DTOs          - 데이터 전송 객체 (커맨드/쿼리, 응답)
//! └── Models        - 외부 계약 모델 (JWT 클레임)
//!      │
//!      ▼
//! Application Layer (Services - 파이프라인 핸들러)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 생성 시점에 고유 식별자가 부여되고 이후 변경되지 않는 엔티티입니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 경계에서 역직렬화되는 커맨드/쿼리와 클라이언트에 반환되는 응답 모델입니다.
//! 커맨드는 `validator` 크레이트의 `#[derive(Validate)]`로 검증 규칙을 선언합니다.
//!
//! ### [`models`] - 외부 계약 모델
//!
//! 토큰 발급에 사용하는 JWT 클레임 구조입니다.

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
pub use entities::*;
pub use models::*;
