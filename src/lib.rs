//! tts-proxy - 文本转语音边缘代理
//!
//! 把简单的查询参数请求转换为对上游云端 TTS 服务的调用，
//! 统一处理鉴权、请求签名与响应格式。
//!
//! 领域层 (domain/):
//! - Credential Context: 上游凭证与 JWT 过期时间
//! - Synthesis Context: 合成请求与 SSML
//! - Catalog Context: 音色目录过滤与输出形态
//!
//! 应用层 (application/):
//! - Ports: TokenIssuer, CredentialProvider, SpeechEngine, VoiceCatalog
//! - Commands: 语音合成
//! - Queries: 音色列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 路由、CORS、API Key
//! - Memory: 凭证管理器、音色列表缓存
//! - Adapters: 签名器与上游 HTTP 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
