//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── customers/
//! │   ├── request.rs   # CreateCustomerCommand, GetCustomerByIdQuery
//! │   └── response.rs  # CustomerDto
//! └── tokens/
//!     └── response.rs  # TokenResponse
//! ```
//!
//! 에러 응답 본문(`ErrorResponse`)은 변환기와 함께 [`crate::core::errors`]에 있습니다.

pub mod customers;
pub mod tokens;

pub use customers::*;
pub use tokens::*;
