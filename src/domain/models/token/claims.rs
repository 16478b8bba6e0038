use serde::{Deserialize, Serialize};

/// 테스트 토큰에 담기는 JWT 클레임
///
/// 매 발급마다 새 `jti`가 부여되므로 같은 초에 발급된 토큰도 서로 다릅니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체
    pub sub: String,
    /// 표시 이름
    pub name: String,
    /// 토큰 고유 식별자
    pub jti: String,
    /// 발급자
    pub iss: String,
    /// 대상
    pub aud: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
