//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티를 정의합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **식별성**: 생성 시점에 UUID v4 식별자를 부여합니다
//! - **불변성**: 필드는 비공개이며 읽기 접근자만 제공합니다
//! - **재구성**: 저장소나 테스트 더블은 `with_id`로 완성된 엔티티를 만들 수 있습니다
//!
//! ```text
//! entities/
//! ├── mod.rs
//! └── customers/
//!     ├── mod.rs
//!     └── customer.rs  ← Customer 엔티티
//! ```

pub mod customers;

pub use customers::Customer;
