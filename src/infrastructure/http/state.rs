//! Application State
//!
//! 包含 API Key 与所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    CredentialProviderPort, ListVoicesHandler, SpeechEnginePort, SynthesizeSpeechHandler,
    VoiceCatalogPort,
};
use crate::domain::synthesis::TextEscaping;

/// 应用状态
pub struct AppState {
    /// 请求头 `x-api-key` 必须与之相等
    pub api_key: String,

    // ========== Command Handlers ==========
    pub synthesize_handler: SynthesizeSpeechHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        api_key: impl Into<String>,
        credentials: Arc<dyn CredentialProviderPort>,
        speech_engine: Arc<dyn SpeechEnginePort>,
        voice_catalog: Arc<dyn VoiceCatalogPort>,
        escaping: TextEscaping,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            synthesize_handler: SynthesizeSpeechHandler::new(credentials, speech_engine, escaping),
            list_voices_handler: ListVoicesHandler::new(voice_catalog),
        }
    }
}
