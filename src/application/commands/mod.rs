//! 应用层 - 命令
//!
//! CQRS 命令侧：会调用上游并可能刷新凭证的操作

mod synthesis_commands;

pub mod handlers;

pub use synthesis_commands::*;
