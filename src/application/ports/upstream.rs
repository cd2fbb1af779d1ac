//! 上游调用的公共错误类型

use thiserror::Error;

/// 上游服务错误
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl UpstreamError {
    /// 由非 2xx 状态码构造，状态文本取标准原因短语
    pub fn from_status(status: http::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}
