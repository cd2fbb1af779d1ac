//! HTTP Routes
//!
//! Endpoints:
//! - /tts      GET/HEAD/POST  合成语音（t, v, r, p, o, d）
//! - /voices   GET/HEAD/POST  音色列表（l, f）
//! - 其他路径  任意方法       用法说明页
//!
//! OPTIONS 预检由 CORS 中间件在路由之前处理

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/tts",
            get(handlers::synthesize)
                .post(handlers::synthesize)
                .fallback(handlers::usage_page),
        )
        .route(
            "/voices",
            get(handlers::list_voices)
                .post(handlers::list_voices)
                .fallback(handlers::usage_page),
        )
        .fallback(handlers::usage_page)
}
