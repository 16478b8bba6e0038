//! 인증 관련 서비스

pub mod token_service;

pub use token_service::TokenService;
