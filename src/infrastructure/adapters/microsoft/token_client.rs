//! Token Issuer Client - 调用翻译客户端的 endpoint 接口换取语音服务令牌
//!
//! POST https://dev.microsofttranslator.com/apps/endpoint?api-version=1.0
//! Request: 空 body，签名放在 `X-MT-Signature`
//! Response: {"r": "<region>", "t": "<jwt>"}

use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;

use super::client_identity;
use super::Signer;
use crate::application::ports::{IssuedToken, TokenIssuerPort, UpstreamError};
use crate::domain::credential::ClientTraceId;

#[derive(Debug, Deserialize)]
struct EndpointResponse {
    /// JWT
    t: String,
    /// 区域
    r: String,
}

/// 令牌签发客户端
pub struct HttpTokenIssuer {
    client: Client,
    token_url: String,
    signer: Signer,
}

impl HttpTokenIssuer {
    pub fn new(client: Client, token_url: impl Into<String>, signer: Signer) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            signer,
        }
    }
}

#[async_trait]
impl TokenIssuerPort for HttpTokenIssuer {
    async fn issue(&self, trace_id: &ClientTraceId) -> Result<IssuedToken, UpstreamError> {
        let signature = self.signer.sign(&self.token_url)?;

        tracing::debug!(url = %self.token_url, trace_id = %trace_id, "Requesting speech token");

        let response = self
            .client
            .post(&self.token_url)
            .header(ACCEPT_LANGUAGE, client_identity::ACCEPT_LANGUAGE)
            .header("X-ClientVersion", client_identity::CLIENT_VERSION)
            .header("X-UserId", client_identity::USER_ID)
            .header("X-HomeGeographicRegion", client_identity::HOME_REGION)
            .header("X-ClientTraceId", trace_id.as_str())
            .header("X-MT-Signature", signature)
            .header(USER_AGENT, client_identity::USER_AGENT)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body("")
            .send()
            .await
            .map_err(|e| UpstreamError::Network(format!("token endpoint: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::from_status(status));
        }

        let endpoint: EndpointResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("token endpoint: {}", e)))?;

        Ok(IssuedToken {
            token: endpoint.t,
            region: endpoint.r,
        })
    }
}
