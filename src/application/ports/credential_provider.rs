//! Credential Provider Port - 带缓存的凭证获取
//!
//! 具体实现在 infrastructure/memory 层

use async_trait::async_trait;
use thiserror::Error;

use super::UpstreamError;
use crate::domain::credential::{Credential, CredentialError};

/// 凭证获取错误
#[derive(Debug, Error)]
pub enum CredentialProviderError {
    #[error("Token issuer failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Issued token rejected: {0}")]
    Token(#[from] CredentialError),
}

/// Credential Provider Port
///
/// 有效期内幂等：未过期时返回缓存凭证，否则刷新
#[async_trait]
pub trait CredentialProviderPort: Send + Sync {
    async fn credential(&self) -> Result<Credential, CredentialProviderError>;
}
