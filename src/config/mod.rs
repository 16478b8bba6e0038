//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙집중식으로 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드한 뒤 이 모듈의 접근자를 호출합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Rate Limiting, CORS 설정
//! - [`auth_config`] - 테스트 토큰 발급용 JWT 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export ENVIRONMENT="development"   # development, test, staging, production
//!
//! # CORS (프로덕션)
//! export ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ISSUER="customer-service"
//! export JWT_AUDIENCE="customer-service-clients"
//! export JWT_EXPIRATION_HOURS="1"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
