//! SSML 渲染

use super::SynthesisRequest;

/// 文本插值策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEscaping {
    /// 原样插入（允许调用方传入 SSML 片段）
    #[default]
    Raw,
    /// 转义 XML 特殊字符
    Xml,
}

/// 渲染 SSML 请求体
///
/// 音色名称始终原样插入
pub fn render_ssml(request: &SynthesisRequest, escaping: TextEscaping) -> String {
    let text = match escaping {
        TextEscaping::Raw => request.text.clone(),
        TextEscaping::Xml => escape_xml(&request.text),
    };

    format!(
        concat!(
            r#"<speak xmlns="http://www.w3.org/2001/10/synthesis" xmlns:mstts="http://www.w3.org/2001/mstts" version="1.0" xml:lang="zh-CN">"#,
            r#"<voice name="{voice}">"#,
            r#"<mstts:express-as style="general" styledegree="1.0" role="default">"#,
            r#"<prosody rate="{rate}%" pitch="{pitch}%" volume="50">{text}</prosody>"#,
            r#"</mstts:express-as>"#,
            r#"</voice>"#,
            r#"</speak>"#,
        ),
        voice = request.voice_name,
        rate = request.rate,
        pitch = request.pitch,
        text = text,
    )
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_defaults() {
        let ssml = render_ssml(&request("hello"), TextEscaping::Raw);
        assert!(ssml.starts_with("<speak "));
        assert!(ssml.contains(r#"<voice name="zh-CN-XiaoxiaoMultilingualNeural">"#));
        assert!(ssml.contains(r#"rate="0%""#));
        assert!(ssml.contains(r#"pitch="0%""#));
        assert!(ssml.contains(">hello</prosody>"));
        assert!(ssml.ends_with("</speak>"));
    }

    #[test]
    fn test_render_prosody() {
        let req = SynthesisRequest {
            rate: -10,
            pitch: 25,
            ..request("x")
        };
        let ssml = render_ssml(&req, TextEscaping::Raw);
        assert!(ssml.contains(r#"<prosody rate="-10%" pitch="25%" volume="50">"#));
    }

    #[test]
    fn test_raw_text_passes_markup_through() {
        let ssml = render_ssml(&request(r#"a <break time="1s"/> b"#), TextEscaping::Raw);
        assert!(ssml.contains(r#"a <break time="1s"/> b"#));
    }

    #[test]
    fn test_xml_escaping() {
        let ssml = render_ssml(&request("Tom & \"Jerry\" <3"), TextEscaping::Xml);
        assert!(ssml.contains("Tom &amp; &quot;Jerry&quot; &lt;3"));
    }
}
