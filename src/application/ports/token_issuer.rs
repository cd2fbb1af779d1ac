//! Token Issuer Port - 上游令牌签发端点
//!
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::credential::ClientTraceId;

/// 签发结果：JWT + 区域
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub region: String,
}

/// Token Issuer Port
#[async_trait]
pub trait TokenIssuerPort: Send + Sync {
    /// 以给定的追踪 ID 请求一个新令牌
    async fn issue(&self, trace_id: &ClientTraceId) -> Result<IssuedToken, UpstreamError>;
}
