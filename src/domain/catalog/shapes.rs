//! 音色列表的过滤与输出形态

use serde_json::{Map, Value};

use super::VoiceDescriptor;

/// `/voices` 的输出形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceListFormat {
    /// `f=0`：MultiTTS 的 speaker 列表（YAML 片段）
    MultiTts,
    /// `f=1`：ShortName → LocalName 的扁平 JSON
    NameMap,
    /// 完整的上游 JSON 数组
    Full,
}

impl VoiceListFormat {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("0") => Self::MultiTts,
            Some("1") => Self::NameMap,
            _ => Self::Full,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::MultiTts => "text/html; charset=utf-8",
            Self::NameMap | Self::Full => "application/json; charset=utf-8",
        }
    }
}

/// 按 Locale 做大小写不敏感的子串过滤，空过滤条件返回全部
pub fn filter_by_locale(voices: Vec<VoiceDescriptor>, locale: &str) -> Vec<VoiceDescriptor> {
    let needle = locale.to_lowercase();
    if needle.is_empty() {
        return voices;
    }
    voices
        .into_iter()
        .filter(|v| v.locale().to_lowercase().contains(&needle))
        .collect()
}

/// 渲染为指定形态的响应体
pub fn render_voice_list(
    voices: &[VoiceDescriptor],
    format: VoiceListFormat,
) -> Result<String, serde_json::Error> {
    match format {
        VoiceListFormat::MultiTts => Ok(voices
            .iter()
            .map(multitts_speaker)
            .collect::<Vec<_>>()
            .join("\n")),
        VoiceListFormat::NameMap => {
            let map: Map<String, Value> = voices
                .iter()
                .map(|v| (v.short_name().to_string(), Value::String(v.local_name().to_string())))
                .collect();
            serde_json::to_string(&map)
        }
        VoiceListFormat::Full => serde_json::to_string(voices),
    }
}

// MultiTTS 按原样解析这段文本，字段顺序和 `gender:` 后无空格都需保持
fn multitts_speaker(voice: &VoiceDescriptor) -> String {
    format!(
        "\n- !!org.nobody.multitts.tts.speaker.Speaker\n  avatar: ''\n  code: {code}\n  desc: ''\n  extendUI: ''\n  gender:{gender}\n  name: {name}\n  note: 'wpm: {wpm}'\n  param: ''\n  sampleRate: {sample_rate}\n  speed: 1.5\n  type: 1\n  volume: 1",
        code = voice.short_name(),
        gender = if voice.is_female() { "0" } else { "1" },
        name = voice.local_name(),
        wpm = voice.words_per_minute_text().unwrap_or_default(),
        sample_rate = voice
            .sample_rate_text()
            .unwrap_or_else(|| "24000".to_string()),
    )
}
