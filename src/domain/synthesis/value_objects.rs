//! Synthesis Context - Value Objects

/// 默认音色
pub const DEFAULT_VOICE: &str = "zh-CN-XiaoxiaoMultilingualNeural";

/// 默认输出格式
pub const DEFAULT_OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// 一次合成请求（由查询参数派生，不持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_name: String,
    /// 语速百分比
    pub rate: i32,
    /// 音调百分比
    pub pitch: i32,
    pub output_format: String,
    pub download: bool,
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            voice_name: DEFAULT_VOICE.to_string(),
            rate: 0,
            pitch: 0,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            download: false,
        }
    }
}

impl SynthesisRequest {
    /// 从原始查询参数构造
    ///
    /// 空值回落到默认值；`rate`/`pitch` 无法解析时为 0
    pub fn from_params(
        text: Option<&str>,
        voice: Option<&str>,
        rate: Option<&str>,
        pitch: Option<&str>,
        output_format: Option<&str>,
        download: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            text: text.unwrap_or_default().to_string(),
            voice_name: non_empty(voice).unwrap_or(defaults.voice_name),
            rate: parse_percent(rate),
            pitch: parse_percent(pitch),
            output_format: non_empty(output_format).unwrap_or(defaults.output_format),
            download: parse_flag(download),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn parse_percent(value: Option<&str>) -> i32 {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };
    raw.parse::<i32>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i32)
        })
        .unwrap_or(0)
}

fn parse_flag(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "" | "0" | "false"),
    }
}
