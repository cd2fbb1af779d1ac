//! Credential Context - 上游访问凭证
//!
//! 职责:
//! - Bearer token + region + 过期时间
//! - JWT `exp` 解析
//! - 客户端追踪 ID

mod errors;
mod value_objects;

pub use errors::CredentialError;
pub use value_objects::{jwt_expiry, ClientTraceId, Credential};
