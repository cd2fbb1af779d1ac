//! Voice Catalog Port - 上游音色列表

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::catalog::VoiceDescriptor;

/// Voice Catalog Port
#[async_trait]
pub trait VoiceCatalogPort: Send + Sync {
    /// 获取完整的音色列表（不做过滤）
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, UpstreamError>;
}
