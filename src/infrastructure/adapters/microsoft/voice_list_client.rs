//! Voice List Client - 拉取完整音色列表
//!
//! GET https://eastus.api.speech.microsoft.com/cognitiveservices/voices/list

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;

use super::client_identity;
use crate::application::ports::{UpstreamError, VoiceCatalogPort};
use crate::domain::catalog::VoiceDescriptor;

/// 音色列表客户端
pub struct HttpVoiceCatalog {
    client: Client,
    voices_url: String,
}

impl HttpVoiceCatalog {
    pub fn new(client: Client, voices_url: impl Into<String>) -> Self {
        Self {
            client,
            voices_url: voices_url.into(),
        }
    }
}

#[async_trait]
impl VoiceCatalogPort for HttpVoiceCatalog {
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, UpstreamError> {
        let response = self
            .client
            .get(&self.voices_url)
            .header(USER_AGENT, client_identity::BROWSER_USER_AGENT)
            .header("X-Ms-Useragent", client_identity::SPEECH_STUDIO_AGENT)
            .header(CONTENT_TYPE, "application/json")
            .header(ORIGIN, client_identity::AZURE_ORIGIN)
            .header(REFERER, client_identity::AZURE_ORIGIN)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(format!("voice list: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::from_status(status));
        }

        let voices: Vec<VoiceDescriptor> = response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("voice list: {}", e)))?;

        tracing::info!(count = voices.len(), "Voice list fetched");
        Ok(voices)
    }
}
