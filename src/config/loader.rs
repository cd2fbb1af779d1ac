//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "TTSPROXY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TTSPROXY_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TTSPROXY_SERVER__PORT=8080`
/// - `TTSPROXY_AUTH__API_KEY=secret`
/// - `TTSPROXY_UPSTREAM__SIGNING_KEY=<base64>`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_environment(config_path, environment())
}

/// 环境变量来源
///
/// 不开启 `try_parsing`：字符串原样保留（如 `007` 形式的 API Key），
/// 数值和布尔字段在反序列化时再解析
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn load_with_environment(
    config_path: Option<&Path>,
    env: Environment,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8787)?
        .set_default("auth.api_key", "")?
        .set_default(
            "upstream.token_url",
            "https://dev.microsofttranslator.com/apps/endpoint?api-version=1.0",
        )?
        .set_default("upstream.signing_key", "")?
        .set_default(
            "upstream.speech_url_template",
            "https://{region}.tts.speech.microsoft.com/cognitiveservices/v1",
        )?
        .set_default(
            "upstream.voices_url",
            "https://eastus.api.speech.microsoft.com/cognitiveservices/voices/list",
        )?
        .set_default("upstream.refresh_margin_secs", 60)?
        .set_default("voices.cache_ttl_secs", 600)?
        .set_default("tts.escape_text", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: TTSPROXY_AUTH__API_KEY=secret
    builder = builder.add_source(env);

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.auth.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "API key cannot be empty".to_string(),
        ));
    }

    let signing_key = config.upstream.signing_key.trim();
    if signing_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "Signing key cannot be empty".to_string(),
        ));
    }
    if STANDARD.decode(signing_key).is_err() {
        return Err(ConfigError::ValidationError(
            "Signing key must be valid base64".to_string(),
        ));
    }

    if config.upstream.token_url.is_empty() || config.upstream.voices_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Upstream URLs cannot be empty".to_string(),
        ));
    }

    if !config.upstream.speech_url_template.contains("{region}") {
        return Err(ConfigError::ValidationError(
            "Speech URL template must contain {region}".to_string(),
        ));
    }

    if config.upstream.refresh_margin_secs < 0 {
        return Err(ConfigError::ValidationError(
            "Refresh margin cannot be negative".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），密钥不输出
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("API Key: {}", mask(&config.auth.api_key));
    tracing::info!("Token URL: {}", config.upstream.token_url);
    tracing::info!("Signing Key: {}", mask(&config.upstream.signing_key));
    tracing::info!("Speech URL: {}", config.upstream.speech_url_template);
    tracing::info!("Voices URL: {}", config.upstream.voices_url);
    tracing::info!("Refresh Margin: {}s", config.upstream.refresh_margin_secs);
    tracing::info!("Voice List Cache TTL: {}s", config.voices.cache_ttl_secs);
    tracing::info!("Escape SSML Text: {}", config.tts.escape_text);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        "<unset>".to_string()
    } else {
        format!("<{} chars>", secret.chars().count())
    }
}
