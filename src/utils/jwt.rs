//! JWT 工具
//!
//! 令牌签发属于外部身份系统，这里只负责校验网关转发过来的 access token，
//! 并为本地开发提供一个签发函数。

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub role: String,       // 用户角色
    pub token_type: String, // token类型: "access"
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成 Access Token（本地开发/运维脚本使用）
    pub fn generate_access_token(
        user_id: i64,
        role: &str,
        expiry: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry;

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: "access".to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != "access" {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }
}
