//! Speech Client - 调用区域语音合成端点
//!
//! POST https://{region}.tts.speech.microsoft.com/cognitiveservices/v1
//! Request: SSML，输出格式放在 `X-Microsoft-OutputFormat`
//! Response: 音频字节流

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;

use super::client_identity;
use crate::application::ports::{SpeechAudio, SpeechEnginePort, UpstreamError};
use crate::domain::credential::Credential;

/// 区域占位符
pub const REGION_PLACEHOLDER: &str = "{region}";

/// 语音合成客户端
pub struct HttpSpeechClient {
    client: Client,
    url_template: String,
}

impl HttpSpeechClient {
    pub fn new(client: Client, url_template: impl Into<String>) -> Self {
        Self {
            client,
            url_template: url_template.into(),
        }
    }

    /// 区域合成端点
    fn endpoint(&self, region: &str) -> String {
        self.url_template.replace(REGION_PLACEHOLDER, region)
    }
}

#[async_trait]
impl SpeechEnginePort for HttpSpeechClient {
    async fn synthesize(
        &self,
        credential: &Credential,
        ssml: String,
        output_format: &str,
    ) -> Result<SpeechAudio, UpstreamError> {
        let url = self.endpoint(&credential.region);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &credential.token)
            .header(CONTENT_TYPE, "application/ssml+xml")
            .header(USER_AGENT, client_identity::USER_AGENT)
            .header("X-Microsoft-OutputFormat", output_format)
            .body(ssml)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(format!("speech endpoint: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Speech endpoint rejected request");
            return Err(UpstreamError::from_status(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        tracing::info!(
            region = %credential.region,
            format = %output_format,
            content_type = ?content_type,
            "Speech synthesis started streaming"
        );

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| UpstreamError::Network(e.to_string())))
            .boxed();

        Ok(SpeechAudio {
            status: status.as_u16(),
            content_type,
            stream,
        })
    }
}
