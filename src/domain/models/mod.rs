//! # Domain Models Module
//!
//! 외부 계약을 표현하는 모델입니다. 현재는 발급 토큰의 JWT 클레임만 포함합니다.

pub mod token;

pub use token::TokenClaims;
