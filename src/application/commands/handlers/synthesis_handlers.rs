//! Synthesis Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::SynthesizeSpeech;
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioStream, CredentialProviderPort, SpeechEnginePort};
use crate::domain::synthesis::{render_ssml, TextEscaping};

/// 合成结果
pub struct SynthesizeSpeechResponse {
    pub status: u16,
    pub content_type: Option<String>,
    /// 下载时的附件文件名（`<uuid>.mp3`）
    pub attachment_name: Option<String>,
    pub stream: AudioStream,
}

/// SynthesizeSpeech Handler
///
/// 获取凭证 → 渲染 SSML → 调用上游，不重试
pub struct SynthesizeSpeechHandler {
    credentials: Arc<dyn CredentialProviderPort>,
    engine: Arc<dyn SpeechEnginePort>,
    escaping: TextEscaping,
}

impl SynthesizeSpeechHandler {
    pub fn new(
        credentials: Arc<dyn CredentialProviderPort>,
        engine: Arc<dyn SpeechEnginePort>,
        escaping: TextEscaping,
    ) -> Self {
        Self {
            credentials,
            engine,
            escaping,
        }
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let request = command.request;
        let credential = self.credentials.credential().await?;
        let ssml = render_ssml(&request, self.escaping);

        tracing::debug!(
            voice = %request.voice_name,
            rate = request.rate,
            pitch = request.pitch,
            format = %request.output_format,
            text_len = request.text.len(),
            region = %credential.region,
            "Submitting synthesis request"
        );

        let audio = self
            .engine
            .synthesize(&credential, ssml, &request.output_format)
            .await
            .map_err(ApplicationError::from_synthesis)?;

        let attachment_name = request
            .download
            .then(|| format!("{}.mp3", Uuid::new_v4().simple()));

        Ok(SynthesizeSpeechResponse {
            status: audio.status,
            content_type: audio.content_type,
            attachment_name,
            stream: audio.stream,
        })
    }
}
