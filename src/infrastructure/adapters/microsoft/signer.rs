//! 令牌签发端点的请求签名
//!
//! 签名格式是上游客户端的固定约定:
//! `MSTranslatorAndroidApp::<base64(hmac)>::<date>::<nonce>`
//! 其中 HMAC-SHA256 的消息为 `MSTranslatorAndroidApp<encodedUrl><date><nonce>` 的小写形式

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::ports::UpstreamError;

type HmacSha256 = Hmac<Sha256>;

const APP_ID: &str = "MSTranslatorAndroidApp";

/// 与 JavaScript `encodeURIComponent` 相同的保留字符集
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 请求签名器
#[derive(Clone)]
pub struct Signer {
    key: Vec<u8>,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer").field("key", &"***").finish()
    }
}

impl Signer {
    /// 由 base64 编码的预共享密钥创建
    pub fn from_base64(key: &str) -> Result<Self, UpstreamError> {
        let key = STANDARD
            .decode(key.trim())
            .map_err(|e| UpstreamError::Signing(format!("invalid signing key: {}", e)))?;
        if key.is_empty() {
            return Err(UpstreamError::Signing("signing key is empty".to_string()));
        }
        Ok(Self { key })
    }

    /// 以当前时间和随机 nonce 签名
    pub fn sign(&self, url: &str) -> Result<String, UpstreamError> {
        self.sign_with(url, Utc::now(), &Uuid::new_v4().simple().to_string())
    }

    pub fn sign_with(
        &self,
        url: &str,
        now: DateTime<Utc>,
        nonce: &str,
    ) -> Result<String, UpstreamError> {
        let target = url.split_once("://").map_or(url, |(_, rest)| rest);
        let encoded_url = utf8_percent_encode(target, URI_COMPONENT).to_string();
        let date = format_date(now);
        let message = format!("{}{}{}{}", APP_ID, encoded_url, date, nonce).to_lowercase();

        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| UpstreamError::Signing(e.to_string()))?;
        mac.update(message.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        Ok(format!("{}::{}::{}::{}", APP_ID, signature, date, nonce))
    }
}

/// RFC 1123 风格的 UTC 时间，小写，如 `sun, 18 oct 2026 08:05:09 gmt`
pub fn format_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
        .to_lowercase()
}
