//! Synthesis HTTP Handler

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::application::SynthesizeSpeech;
use crate::domain::synthesis::SynthesisRequest;
use crate::infrastructure::http::dto::{QueryPairs, TtsQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 合成语音，流式返回上游音频
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let query = TtsQuery::from(pairs);
    let request = SynthesisRequest::from_params(
        query.t.as_deref(),
        query.v.as_deref(),
        query.r.as_deref(),
        query.p.as_deref(),
        query.o.as_deref(),
        query.d.as_deref(),
    );

    let result = state
        .synthesize_handler
        .handle(SynthesizeSpeech { request })
        .await?;

    let mut builder =
        Response::builder().status(StatusCode::from_u16(result.status).unwrap_or(StatusCode::OK));
    if let Some(content_type) = result.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(name) = result.attachment_name {
        builder = builder.header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", name),
        );
    }

    builder
        .body(Body::from_stream(result.stream))
        .map_err(|e| ApiError::Internal(format!("Failed to build audio response: {}", e)))
}
