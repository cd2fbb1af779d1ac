//! Usage Page Handler
//!
//! 未匹配的路径返回简单的用法说明页

use axum::{
    http::{header, HeaderMap, Uri},
    response::Html,
};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// 用法说明页，示例链接指向请求自身的 scheme + host
pub async fn usage_page(headers: HeaderMap, uri: Uri) -> Html<String> {
    let base_url = base_url(&headers, &uri);
    Html(format!(
        r#"
  <ol>
  <li> /tts?t=[text]&v=[voice]&r=[rate]&p=[pitch]&o=[outputFormat] <a href="{base}/tts?t=hello, world&v=zh-CN-XiaoxiaoMultilingualNeural&r=0&p=0&o=audio-24khz-48kbitrate-mono-mp3">try</a> </li>
  <li> /voices?l=[locate, like zh|zh-CN]&f=[format, 0/1/empty 0(TTS-Server)|1(MultiTTS)] <a href="{base}/voices?l=zh&f=1">try</a> </li>
  </ol>
  "#,
        base = base_url
    ))
}

fn base_url(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    format!("{}://{}", scheme, host)
}
