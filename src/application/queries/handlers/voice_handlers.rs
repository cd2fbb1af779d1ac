//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::VoiceCatalogPort;
use crate::application::queries::ListVoices;
use crate::domain::catalog::{filter_by_locale, VoiceDescriptor};

/// ListVoices Handler
pub struct ListVoicesHandler {
    catalog: Arc<dyn VoiceCatalogPort>,
}

impl ListVoicesHandler {
    pub fn new(catalog: Arc<dyn VoiceCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: ListVoices) -> Result<Vec<VoiceDescriptor>, ApplicationError> {
        let voices = self
            .catalog
            .list_voices()
            .await
            .map_err(ApplicationError::from_voice_list)?;
        let total = voices.len();

        let voices = filter_by_locale(voices, &query.locale);
        tracing::debug!(
            locale = %query.locale,
            total,
            matched = voices.len(),
            "Voice list filtered"
        );

        Ok(voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::UpstreamError;
    use async_trait::async_trait;

    struct StaticCatalog(Result<Vec<VoiceDescriptor>, ()>);

    #[async_trait]
    impl VoiceCatalogPort for StaticCatalog {
        async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, UpstreamError> {
            self.0
                .clone()
                .map_err(|_| UpstreamError::Network("connection reset".to_string()))
        }
    }

    fn voices() -> Vec<VoiceDescriptor> {
        vec![
            VoiceDescriptor::new("zh-CN-YunxiNeural", "云希", "zh-CN", "Male"),
            VoiceDescriptor::new("ja-JP-NanamiNeural", "七海", "ja-JP", "Female"),
        ]
    }

    #[tokio::test]
    async fn test_list_filtered() {
        let handler = ListVoicesHandler::new(Arc::new(StaticCatalog(Ok(voices()))));
        let result = handler
            .handle(ListVoices {
                locale: "JA".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].short_name(), "ja-JP-NanamiNeural");
    }

    #[tokio::test]
    async fn test_list_unfiltered() {
        let handler = ListVoicesHandler::new(Arc::new(StaticCatalog(Ok(voices()))));
        let result = handler.handle(ListVoices::default()).await.unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_list_failure() {
        let handler = ListVoicesHandler::new(Arc::new(StaticCatalog(Err(()))));
        let err = handler.handle(ListVoices::default()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::VoiceList(_)));
    }
}
