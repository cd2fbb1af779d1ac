//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod credential_provider;
mod speech_engine;
mod token_issuer;
mod upstream;
mod voice_catalog;

pub use credential_provider::{CredentialProviderError, CredentialProviderPort};
pub use speech_engine::{AudioStream, SpeechAudio, SpeechEnginePort};
pub use token_issuer::{IssuedToken, TokenIssuerPort};
pub use upstream::UpstreamError;
pub use voice_catalog::VoiceCatalogPort;
