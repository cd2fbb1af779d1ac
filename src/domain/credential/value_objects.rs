//! Credential Context - Value Objects

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use uuid::Uuid;

use super::CredentialError;

/// 客户端追踪 ID（无连字符的 UUID）
///
/// 仅作为上游签名/令牌端点的关联标识，每次刷新凭证时重新生成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTraceId(String);

impl ClientTraceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientTraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientTraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 上游签发的访问凭证
///
/// 整体替换，不做局部更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Bearer token（JWT）
    pub token: String,
    /// 语音服务所在区域，如 `eastus`
    pub region: String,
    /// 过期时间（unix 秒）
    pub expires_at: i64,
}

#[derive(Debug, Deserialize)]
struct JwtClaims {
    exp: Option<i64>,
}

impl Credential {
    /// 由上游返回的 token 和 region 构造，`exp` 从 JWT payload 中读取
    pub fn from_issued(token: String, region: String) -> Result<Self, CredentialError> {
        let expires_at = jwt_expiry(&token)?;
        Ok(Self {
            token,
            region,
            expires_at,
        })
    }

    /// 在 `now` 时刻、预留 `margin_secs` 余量的情况下是否仍可直接使用
    pub fn is_usable_at(&self, now: i64, margin_secs: i64) -> bool {
        now < self.expires_at - margin_secs
    }

    /// 剩余有效分钟数（仅用于日志）
    pub fn minutes_left(&self, now: i64) -> f64 {
        (self.expires_at - now) as f64 / 60.0
    }
}

/// 读取 JWT 的 `exp` 声明，不校验签名
pub fn jwt_expiry(token: &str) -> Result<i64, CredentialError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| CredentialError::MalformedToken("missing payload segment".to_string()))?;

    // 兼容带 padding 以及标准 base64 字母表的 payload
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| CredentialError::InvalidPayload(e.to_string()))?;

    let claims: JwtClaims = serde_json::from_slice(&bytes)
        .map_err(|e| CredentialError::InvalidPayload(e.to_string()))?;

    claims.exp.ok_or(CredentialError::MissingExpiry)
}
