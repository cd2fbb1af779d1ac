//! Speech Engine Port - 上游语音合成端点
//!
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;

use super::UpstreamError;
use crate::domain::credential::Credential;

/// 音频字节流
pub type AudioStream = BoxStream<'static, Result<Bytes, UpstreamError>>;

/// 上游合成成功的响应
pub struct SpeechAudio {
    /// 上游 2xx 状态码
    pub status: u16,
    /// 上游 Content-Type
    pub content_type: Option<String>,
    pub stream: AudioStream,
}

impl std::fmt::Debug for SpeechAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAudio")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Speech Engine Port
#[async_trait]
pub trait SpeechEnginePort: Send + Sync {
    /// 提交 SSML，非 2xx 返回 `UpstreamError::Status`
    async fn synthesize(
        &self,
        credential: &Credential,
        ssml: String,
        output_format: &str,
    ) -> Result<SpeechAudio, UpstreamError>;
}
