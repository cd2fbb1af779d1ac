//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Credential Context: 上游访问凭证
//! - Synthesis Context: 合成请求与 SSML
//! - Catalog Context: 音色目录

pub mod catalog;
pub mod credential;
pub mod synthesis;
