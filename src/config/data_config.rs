//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, CORS 설정을 관리합니다.

use std::env;
use std::str::FromStr;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 모든 Origin 허용
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());
        Self::from_name(&name)
    }

    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// 환경 변수를 파싱하고, 실패하면 에러 로그를 남긴 뒤 기본값을 사용합니다.
fn parse_or_default<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        parse_or_default("PORT", env::var("PORT").ok().as_deref(), 8080)
    }

    /// 서버가 바인딩할 호스트. 기본값: `127.0.0.1` (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::parse(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    fn parse(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        Self {
            per_second: parse_or_default(
                "RATE_LIMIT_PER_SECOND",
                per_second,
                Self::DEFAULT_PER_SECOND,
            ),
            burst_size: parse_or_default(
                "RATE_LIMIT_BURST_SIZE",
                burst_size,
                Self::DEFAULT_BURST_SIZE,
            ),
        }
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록 (`ALLOWED_ORIGINS`, 쉼표 구분)
    ///
    /// 설정되지 않으면 로컬 프론트엔드 개발 서버 주소를 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }
}
