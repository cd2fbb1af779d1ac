//! Catalog Context - Value Objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 上游音色描述（透传）
///
/// 保存上游对象本身，序列化结果与上游一致（包括 `null` 和未知字段）；
/// 用到的字段通过访问方法读取，缺失或非字符串时视为空串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceDescriptor(Map<String, Value>);

impl VoiceDescriptor {
    pub fn new(
        short_name: impl Into<String>,
        local_name: impl Into<String>,
        locale: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert("ShortName".to_string(), Value::String(short_name.into()));
        fields.insert("LocalName".to_string(), Value::String(local_name.into()));
        fields.insert("Locale".to_string(), Value::String(locale.into()));
        fields.insert("Gender".to_string(), Value::String(gender.into()));
        Self(fields)
    }

    /// 设置任意上游字段
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn short_name(&self) -> &str {
        self.text("ShortName")
    }

    pub fn local_name(&self) -> &str {
        self.text("LocalName")
    }

    pub fn locale(&self) -> &str {
        self.text("Locale")
    }

    pub fn gender(&self) -> &str {
        self.text("Gender")
    }

    pub fn is_female(&self) -> bool {
        self.gender() == "Female"
    }

    /// 采样率文本，缺失、为空或为 0 时为 `None`
    pub fn sample_rate_text(&self) -> Option<String> {
        self.0.get("SampleRateHertz").and_then(truthy_text)
    }

    /// 每分钟字数文本，缺失、为空或为 0 时为 `None`
    pub fn words_per_minute_text(&self) -> Option<String> {
        self.0.get("WordsPerMinute").and_then(truthy_text)
    }

    fn text(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()) => {
            Some(n.to_string())
        }
        _ => None,
    }
}
