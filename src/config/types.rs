//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 访问控制
    #[serde(default)]
    pub auth: AuthConfig,

    /// 上游服务配置
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// 音色列表配置
    #[serde(default)]
    pub voices: VoicesConfig,

    /// 合成配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 访问控制配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// 请求头 `x-api-key` 的期望值
    #[serde(default)]
    pub api_key: String,
}

/// 上游服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// 令牌签发端点（同时参与签名）
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// base64 编码的 HMAC 预共享密钥
    #[serde(default)]
    pub signing_key: String,

    /// 区域合成端点模板，`{region}` 会被替换
    #[serde(default = "default_speech_url_template")]
    pub speech_url_template: String,

    /// 音色列表端点
    #[serde(default = "default_voices_url")]
    pub voices_url: String,

    /// 距过期不足该秒数时提前刷新
    #[serde(default = "default_refresh_margin")]
    pub refresh_margin_secs: i64,
}

fn default_token_url() -> String {
    "https://dev.microsofttranslator.com/apps/endpoint?api-version=1.0".to_string()
}

fn default_speech_url_template() -> String {
    "https://{region}.tts.speech.microsoft.com/cognitiveservices/v1".to_string()
}

fn default_voices_url() -> String {
    "https://eastus.api.speech.microsoft.com/cognitiveservices/voices/list".to_string()
}

fn default_refresh_margin() -> i64 {
    60
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            token_url: default_token_url(),
            signing_key: String::new(),
            speech_url_template: default_speech_url_template(),
            voices_url: default_voices_url(),
            refresh_margin_secs: default_refresh_margin(),
        }
    }
}

/// 音色列表配置
#[derive(Debug, Clone, Deserialize)]
pub struct VoicesConfig {
    /// 缓存 TTL（秒）
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_cache_ttl() -> u64 {
    600 // 10 分钟
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

/// 合成配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TtsConfig {
    /// 是否对 SSML 中的文本做 XML 转义（默认原样插入）
    #[serde(default)]
    pub escape_text: bool,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
