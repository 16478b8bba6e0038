use serde::{Deserialize, Serialize};

/// 토큰 발급 응답
///
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOi...In0.sig" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
