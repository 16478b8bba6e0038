//! # Token Service
//!
//! HS256 서명 테스트 토큰을 발급합니다.
//! 고객 API는 이 토큰을 불투명한 bearer 자격 증명으로만 취급하며 검증하지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use log::info;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::TokenResponse;
use crate::domain::models::TokenClaims;

const TEST_SUBJECT: &str = "test-user";
const TEST_NAME: &str = "Test User";

/// 테스트 토큰 발급 서비스
///
/// 전역 상태 없이 명시적으로 생성되어 `web::Data<TokenService>`로 주입됩니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    issuer: String,
    audience: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expiration_hours: i64,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            expiration_hours,
        }
    }

    /// [`JwtConfig`]의 환경 변수 설정으로 서비스를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(
            JwtConfig::secret(),
            JwtConfig::issuer(),
            JwtConfig::audience(),
            JwtConfig::expiration_hours(),
        )
    }

    /// 테스트용 액세스 토큰을 발급합니다.
    ///
    /// 호출마다 새 `jti`가 부여되므로 연속 호출 결과는 항상 다릅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Internal` - 토큰 서명 실패
    pub fn issue_test_token(&self) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: TEST_SUBJECT.to_string(),
            name: TEST_NAME.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        let access_token = encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::Internal(format!("JWT 토큰 생성 실패: {}", e)))?;

        info!("🔑 테스트 토큰 발급: jti={}", claims.jti);
        Ok(TokenResponse { access_token })
    }
}
