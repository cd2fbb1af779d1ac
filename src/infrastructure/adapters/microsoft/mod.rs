//! Microsoft Speech Adapters
//!
//! - 请求签名
//! - 令牌签发
//! - 区域语音合成
//! - 音色列表

mod signer;
mod speech_client;
mod token_client;
mod voice_list_client;

pub use signer::{format_date, Signer};
pub use speech_client::{HttpSpeechClient, REGION_PLACEHOLDER};
pub use token_client::HttpTokenIssuer;
pub use voice_list_client::HttpVoiceCatalog;

/// 上游识别客户端身份用的固定常量
pub mod client_identity {
    pub const ACCEPT_LANGUAGE: &str = "zh-Hans";
    pub const CLIENT_VERSION: &str = "4.0.530a 5fe1dc6c";
    pub const USER_ID: &str = "0f04d16a175c411e";
    pub const HOME_REGION: &str = "zh-Hans-CN";
    pub const USER_AGENT: &str = "okhttp/4.5.0";

    pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36 Edg/107.0.1418.26";
    pub const SPEECH_STUDIO_AGENT: &str = "SpeechStudio/2021.05.001";
    pub const AZURE_ORIGIN: &str = "https://azure.microsoft.com";
}
