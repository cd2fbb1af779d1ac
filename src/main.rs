//! tts-proxy - 边缘 TTS 代理
//!
//! - Domain: credential/, synthesis/, catalog/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, adapters

use std::sync::Arc;
use std::time::Duration;

use tts_proxy::config::{load_config, print_config};
use tts_proxy::domain::synthesis::TextEscaping;
use tts_proxy::infrastructure::adapters::{
    HttpSpeechClient, HttpTokenIssuer, HttpVoiceCatalog, Signer,
};
use tts_proxy::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tts_proxy::infrastructure::memory::{CachedVoiceCatalog, TokenManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},tts_proxy={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("tts-proxy - 边缘 TTS 代理");
    print_config(&config);

    let http_client = reqwest::Client::builder()
        .gzip(true)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

    // 令牌：签名 → 签发 → 缓存
    let signer = Signer::from_base64(&config.upstream.signing_key)?;
    let token_issuer = Arc::new(HttpTokenIssuer::new(
        http_client.clone(),
        &config.upstream.token_url,
        signer,
    ));
    let credentials = TokenManager::new(token_issuer, config.upstream.refresh_margin_secs).arc();

    // 合成引擎
    let speech_engine = Arc::new(HttpSpeechClient::new(
        http_client.clone(),
        &config.upstream.speech_url_template,
    ));

    // 音色列表（带 TTL 缓存）
    let voice_catalog = Arc::new(CachedVoiceCatalog::new(
        Arc::new(HttpVoiceCatalog::new(http_client, &config.upstream.voices_url)),
        Duration::from_secs(config.voices.cache_ttl_secs),
    ));

    let escaping = if config.tts.escape_text {
        TextEscaping::Xml
    } else {
        TextEscaping::Raw
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        config.auth.api_key.clone(),
        credentials,
        speech_engine,
        voice_catalog,
        escaping,
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
