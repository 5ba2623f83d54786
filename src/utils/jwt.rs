//! 会话令牌工具
//!
//! 登录与令牌签发是宿主平台的职责，这里只校验平台用共享密钥签出的
//! 会话 JWT。签发函数保留给本地开发与测试用。

use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// 会话 Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // Subject (user ID)
    pub exp: usize,  // Expiration time (时间戳)
    pub iat: usize,  // Issued at (签发时间)
}

pub struct SessionTokenUtils;

impl SessionTokenUtils {
    // 获取共享密钥
    fn get_secret() -> String {
        AppConfig::get().session.secret.clone()
    }

    // 校验会话令牌
    pub fn verify_token(token: &str) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        Self::verify_with_secret(token, &Self::get_secret())
    }

    // 签发会话令牌（本地开发与测试用）
    pub fn issue_token(user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::issue_with_secret(
            user_id,
            &config.session.secret,
            chrono::Duration::minutes(config.session.token_expiry),
        )
    }

    pub(crate) fn verify_with_secret(
        token: &str,
        secret: &str,
    ) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<SessionClaims>(token, &decoding_key, &validation).map(|data| data.claims)
    }

    pub(crate) fn issue_with_secret(
        user_id: i64,
        secret: &str,
        expiry: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            exp: (now + expiry).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), &claims, &encoding_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "studentdash-test-secret";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let token =
            SessionTokenUtils::issue_with_secret(42, TEST_SECRET, chrono::Duration::minutes(5))
                .unwrap();
        let claims = SessionTokenUtils::verify_with_secret(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.sub, "42");
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token =
            SessionTokenUtils::issue_with_secret(42, TEST_SECRET, chrono::Duration::minutes(5))
                .unwrap();
        assert!(SessionTokenUtils::verify_with_secret(&token, "other-secret").is_err());
    }

    #[test]
    fn test_verify_rejects_expired() {
        let token =
            SessionTokenUtils::issue_with_secret(42, TEST_SECRET, chrono::Duration::minutes(-10))
                .unwrap();
        assert!(SessionTokenUtils::verify_with_secret(&token, TEST_SECRET).is_err());
    }
}
