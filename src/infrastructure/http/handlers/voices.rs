//! Voice List HTTP Handler

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::ListVoices;
use crate::domain::catalog::{render_voice_list, VoiceListFormat};
use crate::infrastructure::http::dto::{QueryPairs, VoicesQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取音色列表
///
/// - `l`: Locale 子串过滤
/// - `f`: 0 = MultiTTS 列表，1 = ShortName→LocalName，其他 = 完整数组
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let query = VoicesQuery::from(pairs);
    let voices = state
        .list_voices_handler
        .handle(ListVoices {
            locale: query.l.unwrap_or_default(),
        })
        .await?;

    let format = VoiceListFormat::from_param(query.f.as_deref());
    let body = render_voice_list(&voices, format)
        .map_err(|e| ApiError::Internal(format!("Failed to render voice list: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}
