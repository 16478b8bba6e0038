//! 토큰 관련 DTO

pub mod response;

pub use response::TokenResponse;
