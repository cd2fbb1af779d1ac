//! In-Memory Voice Catalog Cache
//!
//! 对上游音色列表做进程内 TTL 缓存，所有调用方共享同一个条目

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::application::ports::{UpstreamError, VoiceCatalogPort};
use crate::domain::catalog::VoiceDescriptor;

/// 固定缓存键
pub const VOICE_LIST_CACHE_KEY: &str = "mstrans-voice-list";

/// 默认 TTL（10 分钟）
pub const DEFAULT_VOICE_LIST_TTL: Duration = Duration::from_secs(600);

struct CacheEntry {
    fetched_at: Instant,
    voices: Vec<VoiceDescriptor>,
}

/// 带缓存的音色目录
///
/// 失败结果不缓存
pub struct CachedVoiceCatalog {
    inner: Arc<dyn VoiceCatalogPort>,
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl CachedVoiceCatalog {
    pub fn new(inner: Arc<dyn VoiceCatalogPort>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entry: RwLock::new(None),
        }
    }

    fn fresh(&self, entry: &Option<CacheEntry>) -> Option<Vec<VoiceDescriptor>> {
        entry
            .as_ref()
            .filter(|e| e.fetched_at.elapsed() < self.ttl)
            .map(|e| e.voices.clone())
    }
}

#[async_trait]
impl VoiceCatalogPort for CachedVoiceCatalog {
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, UpstreamError> {
        if let Some(voices) = self.fresh(&*self.entry.read().await) {
            tracing::debug!(key = VOICE_LIST_CACHE_KEY, "Voice list cache hit");
            return Ok(voices);
        }

        let mut entry = self.entry.write().await;
        if let Some(voices) = self.fresh(&entry) {
            return Ok(voices);
        }

        tracing::debug!(key = VOICE_LIST_CACHE_KEY, "Voice list cache miss");
        let voices = self.inner.list_voices().await?;
        *entry = Some(CacheEntry {
            fetched_at: Instant::now(),
            voices: voices.clone(),
        });
        Ok(voices)
    }
}
