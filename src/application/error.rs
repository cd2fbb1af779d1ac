//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{CredentialProviderError, UpstreamError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 令牌签发失败（网络、JSON 或 JWT 错误）
    #[error("Token issuer error: {0}")]
    TokenIssuer(String),

    /// 合成端点返回非 2xx
    #[error("Synthesis failed with HTTP {status}: {status_text}")]
    Synthesis { status: u16, status_text: String },

    /// 合成端点不可达
    #[error("Synthesis transport error: {0}")]
    SynthesisTransport(String),

    /// 音色列表获取失败
    #[error("Voice list error: {0}")]
    VoiceList(String),
}

impl ApplicationError {
    /// 合成端点错误映射
    pub fn from_synthesis(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status {
                status,
                status_text,
            } => Self::Synthesis {
                status,
                status_text,
            },
            other => Self::SynthesisTransport(other.to_string()),
        }
    }

    /// 音色列表错误映射
    pub fn from_voice_list(err: UpstreamError) -> Self {
        Self::VoiceList(err.to_string())
    }
}

impl From<CredentialProviderError> for ApplicationError {
    fn from(err: CredentialProviderError) -> Self {
        Self::TokenIssuer(err.to_string())
    }
}
