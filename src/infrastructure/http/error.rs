//! HTTP Error Handling
//!
//! 所有错误以纯文本响应返回，状态码确定；CORS 头由外层中间件统一补齐

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// `x-api-key` 缺失或不匹配
    Unauthorized,
    /// 透传上游合成端点的状态码与状态文本
    UpstreamStatus { status: u16, status_text: String },
    /// 上游不可用或返回无法解析的内容
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::UpstreamStatus {
                status,
                status_text,
            } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                tracing::warn!(status = %status.as_u16(), "Upstream synthesis error passed through");
                (status, status_text)
            }
            ApiError::BadGateway(msg) => {
                tracing::error!(error = %msg, "Upstream failure");
                (StatusCode::BAD_GATEWAY, format!("Bad Gateway: {}", msg))
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Synthesis {
                status,
                status_text,
            } => ApiError::UpstreamStatus {
                status,
                status_text,
            },
            ApplicationError::TokenIssuer(_)
            | ApplicationError::SynthesisTransport(_)
            | ApplicationError::VoiceList(_) => ApiError::BadGateway(e.to_string()),
        }
    }
}
