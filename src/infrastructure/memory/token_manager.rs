//! In-Memory Token Manager Implementation

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::{CredentialProviderError, CredentialProviderPort, TokenIssuerPort};
use crate::domain::credential::{ClientTraceId, Credential};

/// 进程内凭证状态
#[derive(Debug, Default)]
struct TokenState {
    credential: Option<Credential>,
    trace_id: ClientTraceId,
}

/// 内存凭证管理器
///
/// 缓存上游凭证，在 `expires_at - margin_secs` 之前直接复用。
/// 刷新在写锁内完成，同一实例上的并发请求只会触发一次刷新。
pub struct TokenManager {
    issuer: Arc<dyn TokenIssuerPort>,
    margin_secs: i64,
    state: RwLock<TokenState>,
}

impl TokenManager {
    pub fn new(issuer: Arc<dyn TokenIssuerPort>, margin_secs: i64) -> Self {
        Self {
            issuer,
            margin_secs,
            state: RwLock::new(TokenState::default()),
        }
    }

    /// 以已有凭证初始化
    pub fn with_credential(
        issuer: Arc<dyn TokenIssuerPort>,
        margin_secs: i64,
        credential: Credential,
    ) -> Self {
        Self {
            issuer,
            margin_secs,
            state: RwLock::new(TokenState {
                credential: Some(credential),
                trace_id: ClientTraceId::new(),
            }),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 当前客户端追踪 ID
    pub async fn trace_id(&self) -> ClientTraceId {
        self.state.read().await.trace_id.clone()
    }

    /// 以 `now`（unix 秒）为当前时间获取凭证
    pub async fn credential_at(&self, now: i64) -> Result<Credential, CredentialProviderError> {
        if let Some(credential) = self.usable(&*self.state.read().await, now) {
            return Ok(credential);
        }

        let mut state = self.state.write().await;
        if let Some(credential) = self.usable(&state, now) {
            return Ok(credential);
        }

        let trace_id = ClientTraceId::new();
        let issued = self.issuer.issue(&trace_id).await?;
        let credential = Credential::from_issued(issued.token, issued.region)?;

        tracing::info!(
            region = %credential.region,
            trace_id = %trace_id,
            minutes_left = credential.minutes_left(now),
            "Credential refreshed"
        );

        state.trace_id = trace_id;
        state.credential = Some(credential.clone());
        Ok(credential)
    }

    fn usable(&self, state: &TokenState, now: i64) -> Option<Credential> {
        let credential = state.credential.as_ref()?;
        if !credential.is_usable_at(now, self.margin_secs) {
            return None;
        }
        tracing::debug!(
            minutes_left = credential.minutes_left(now),
            "Reusing cached credential"
        );
        Some(credential.clone())
    }
}

#[async_trait]
impl CredentialProviderPort for TokenManager {
    async fn credential(&self) -> Result<Credential, CredentialProviderError> {
        self.credential_at(Utc::now().timestamp()).await
    }
}
