//! Memory Layer - In-Memory State Management
//!
//! 实现 CredentialProvider 与音色列表缓存，管理进程内状态

mod token_manager;
mod voice_catalog_cache;

pub use token_manager::TokenManager;
pub use voice_catalog_cache::{CachedVoiceCatalog, DEFAULT_VOICE_LIST_TTL, VOICE_LIST_CACHE_KEY};
