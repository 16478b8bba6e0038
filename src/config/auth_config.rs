//! # Authentication Configuration Module
//!
//! 테스트 토큰 발급에 사용하는 JWT 설정을 관리합니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ISSUER="customer-service"
//! export JWT_AUDIENCE="customer-service-clients"
//! export JWT_EXPIRATION_HOURS="1"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let secret = JwtConfig::secret();
//! let expires_at = Utc::now() + Duration::hours(JwtConfig::expiration_hours());
//! ```

use std::env;

use log::{error, warn};

const DEFAULT_SECRET: &str = "customer-service-development-secret-key-change-me";
const DEFAULT_ISSUER: &str = "customer-service";
const DEFAULT_AUDIENCE: &str = "customer-service-clients";
const DEFAULT_EXPIRATION_HOURS: i64 = 1;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 없으면 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_SECRET.to_string()
        })
    }

    /// 토큰 발급자(`iss`). 기본값: `customer-service`
    pub fn issuer() -> String {
        env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string())
    }

    /// 토큰 대상(`aud`). 기본값: `customer-service-clients`
    pub fn audience() -> String {
        env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_AUDIENCE.to_string())
    }

    /// 액세스 토큰 만료 시간(시간 단위). 기본값: 1시간
    ///
    /// 0 이하이거나 숫자가 아닌 값은 기본값으로 대체됩니다.
    pub fn expiration_hours() -> i64 {
        Self::parse_expiration_hours(env::var("JWT_EXPIRATION_HOURS").ok().as_deref())
    }

    fn parse_expiration_hours(raw: Option<&str>) -> i64 {
        match raw.map(|value| value.trim().parse::<i64>()) {
            None => DEFAULT_EXPIRATION_HOURS,
            Some(Ok(hours)) if hours > 0 => hours,
            Some(_) => {
                error!(
                    "JWT_EXPIRATION_HOURS 파싱 실패: {:?}. 기본값 {} 사용",
                    raw, DEFAULT_EXPIRATION_HOURS
                );
                DEFAULT_EXPIRATION_HOURS
            }
        }
    }
}
