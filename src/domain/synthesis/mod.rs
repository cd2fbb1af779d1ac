//! Synthesis Context - 语音合成请求
//!
//! 职责:
//! - 查询参数 → 合成请求
//! - SSML 渲染

mod ssml;
mod value_objects;

pub use ssml::{render_ssml, TextEscaping};
pub use value_objects::{SynthesisRequest, DEFAULT_OUTPUT_FORMAT, DEFAULT_VOICE};
