//! Voice Queries

/// 列出上游音色查询
#[derive(Debug, Clone, Default)]
pub struct ListVoices {
    /// Locale 子串过滤（大小写不敏感），空串表示不过滤
    pub locale: String,
}
