//! Data Transfer Objects - 查询参数
//!
//! 查询串先按原始键值对解析，重复的键取第一次出现的值

/// 原始查询键值对（保持出现顺序）
pub type QueryPairs = Vec<(String, String)>;

fn first(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// `/tts` 查询参数
#[derive(Debug, Default, PartialEq)]
pub struct TtsQuery {
    /// 文本
    pub t: Option<String>,
    /// 音色
    pub v: Option<String>,
    /// 语速（百分比）
    pub r: Option<String>,
    /// 音调（百分比）
    pub p: Option<String>,
    /// 输出格式
    pub o: Option<String>,
    /// 下载标记
    pub d: Option<String>,
}

impl From<QueryPairs> for TtsQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            t: first(&pairs, "t"),
            v: first(&pairs, "v"),
            r: first(&pairs, "r"),
            p: first(&pairs, "p"),
            o: first(&pairs, "o"),
            d: first(&pairs, "d"),
        }
    }
}

/// `/voices` 查询参数
#[derive(Debug, Default, PartialEq)]
pub struct VoicesQuery {
    /// Locale 过滤
    pub l: Option<String>,
    /// 输出形态
    pub f: Option<String>,
}

impl From<QueryPairs> for VoicesQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            l: first(&pairs, "l"),
            f: first(&pairs, "f"),
        }
    }
}
