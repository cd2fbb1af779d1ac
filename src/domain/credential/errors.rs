//! Credential Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("JWT 格式错误: {0}")]
    MalformedToken(String),

    #[error("JWT payload 解码失败: {0}")]
    InvalidPayload(String),

    #[error("JWT 缺少 exp 声明")]
    MissingExpiry,
}
