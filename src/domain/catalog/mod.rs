//! Catalog Context - 上游音色目录
//!
//! 职责:
//! - 音色描述透传
//! - Locale 过滤
//! - 三种输出形态

mod shapes;
mod value_objects;

pub use shapes::{filter_by_locale, render_voice_list, VoiceListFormat};
pub use value_objects::VoiceDescriptor;
