//! HTTP API 端到端测试
//!
//! 上游三个端点（令牌签发、区域合成、音色列表）由 wiremock 模拟，
//! 通过 `build_router` + `oneshot` 驱动完整的中间件栈

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use wiremock::matchers::{body_string_contains, header as header_eq, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tts_proxy::domain::synthesis::TextEscaping;
use tts_proxy::infrastructure::adapters::{
    HttpSpeechClient, HttpTokenIssuer, HttpVoiceCatalog, Signer,
};
use tts_proxy::infrastructure::http::{build_router, AppState};
use tts_proxy::infrastructure::memory::{CachedVoiceCatalog, TokenManager};

const API_KEY: &str = "test-key";
const SIGNING_KEY: &str = "c2lnbmluZy1rZXk=";
const REGION: &str = "mockregion";
const AUDIO: &[u8] = b"ID3-fake-mp3-bytes";

fn fake_jwt() -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "exp": exp }).to_string());
    format!("{}.{}.sig", header, payload)
}

fn voice_list() -> Value {
    json!([
        {
            "ShortName": "zh-CN-XiaoxiaoNeural",
            "LocalName": "晓晓",
            "Locale": "zh-CN",
            "Gender": "Female",
            "SampleRateHertz": "24000"
        },
        {
            "ShortName": "en-US-GuyNeural",
            "LocalName": "Guy",
            "Locale": "en-US",
            "Gender": "Male",
            "SampleRateHertz": "24000"
        }
    ])
}

async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/apps/endpoint"))
        .and(header_exists("X-MT-Signature"))
        .and(header_exists("X-ClientTraceId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "t": fake_jwt(),
            "r": REGION,
        })))
        .mount(server)
        .await;
}

fn build_app(server: &MockServer) -> Router {
    let client = reqwest::Client::new();
    let signer = Signer::from_base64(SIGNING_KEY).unwrap();
    let issuer = Arc::new(HttpTokenIssuer::new(
        client.clone(),
        format!("{}/apps/endpoint", server.uri()),
        signer,
    ));
    let credentials = TokenManager::new(issuer, 60).arc();
    let speech = Arc::new(HttpSpeechClient::new(
        client.clone(),
        format!("{}/{{region}}/cognitiveservices/v1", server.uri()),
    ));
    let voices = Arc::new(CachedVoiceCatalog::new(
        Arc::new(HttpVoiceCatalog::new(
            client,
            format!("{}/cognitiveservices/voices/list", server.uri()),
        )),
        Duration::ZERO,
    ));

    let state = AppState::new(API_KEY, credentials, speech, voices, TextEscaping::Raw);
    build_router(Arc::new(state))
}

fn authed(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn assert_cors(response: &axum::response::Response) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET,HEAD,POST,OPTIONS"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn test_missing_api_key_is_rejected() {
    let server = MockServer::start().await;
    let app = build_app(&server);

    let request = Request::builder()
        .uri("/tts?t=hello")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_cors(&response);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_wrong_api_key_is_rejected() {
    let server = MockServer::start().await;
    let app = build_app(&server);

    let request = Request::builder()
        .uri("/voices")
        .header("x-api-key", "nope")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_preflight_skips_api_key() {
    let server = MockServer::start().await;
    let app = build_app(&server);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/tts")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-api-key")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_cors(&response);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "x-api-key"
    );
}

#[tokio::test]
async fn test_unknown_path_serves_usage_page() {
    let server = MockServer::start().await;
    let app = build_app(&server);

    let request = Request::builder()
        .uri("/")
        .header("x-api-key", API_KEY)
        .header(header::HOST, "tts.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("http://tts.example.com/voices?l=zh&f=1"));
}

#[tokio::test]
async fn test_voices_name_map_with_locale_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cognitiveservices/voices/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(voice_list()))
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app.oneshot(authed("/voices?l=ZH&f=1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({ "zh-CN-XiaoxiaoNeural": "晓晓" }));
}

#[tokio::test]
async fn test_voices_full_list_without_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cognitiveservices/voices/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(voice_list()))
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app.oneshot(authed("/voices?l=")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let voices = body.as_array().unwrap();
    assert_eq!(voices.len(), 2);
    assert_eq!(voices[1]["ShortName"], "en-US-GuyNeural");
}

#[tokio::test]
async fn test_voices_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cognitiveservices/voices/list"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app.oneshot(authed("/voices")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_cors(&response);
}

#[tokio::test]
async fn test_tts_streams_upstream_audio() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/{}/cognitiveservices/v1", REGION)))
        .and(header_eq("content-type", "application/ssml+xml"))
        .and(header_eq(
            "x-microsoft-outputformat",
            "audio-24khz-48kbitrate-mono-mp3",
        ))
        .and(body_string_contains(r#"<voice name="en-US-GuyNeural">"#))
        .and(body_string_contains(r#"rate="10%" pitch="-5%""#))
        .and(body_string_contains("hello"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(AUDIO),
        )
        .expect(1)
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app
        .oneshot(authed("/tts?t=hello&v=en-US-GuyNeural&r=10&p=-5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
    assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
    assert_eq!(body_bytes(response).await, AUDIO);
}

#[tokio::test]
async fn test_tts_download_sets_attachment() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/{}/cognitiveservices/v1", REGION)))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(AUDIO),
        )
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app.oneshot(authed("/tts?t=hi&d=1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\""));
    assert!(disposition.ends_with(".mp3\""));
}

#[tokio::test]
async fn test_tts_passes_through_upstream_status() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/{}/cognitiveservices/v1", REGION)))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app.oneshot(authed("/tts?t=hi")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_cors(&response);
    assert_eq!(body_bytes(response).await, b"Too Many Requests");
}

#[tokio::test]
async fn test_tts_token_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/endpoint"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app.oneshot(authed("/tts?t=hi")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_token_is_reused_across_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/endpoint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "t": fake_jwt(),
            "r": REGION,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/{}/cognitiveservices/v1", REGION)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(AUDIO))
        .expect(2)
        .mount(&server)
        .await;
    let app = build_app(&server);

    for _ in 0..2 {
        let response = app.clone().oneshot(authed("/tts?t=hi")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_bytes(response).await;
    }
}

#[tokio::test]
async fn test_tts_repeated_key_uses_first_value() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/{}/cognitiveservices/v1", REGION)))
        .and(body_string_contains(r#"volume="50">first</prosody>"#))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(AUDIO))
        .expect(1)
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app
        .oneshot(authed("/tts?t=first&t=second"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, AUDIO);
}

#[tokio::test]
async fn test_voices_repeated_key_uses_first_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cognitiveservices/voices/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(voice_list()))
        .mount(&server)
        .await;
    let app = build_app(&server);

    let response = app
        .oneshot(authed("/voices?l=zh&l=en&f=1&f=0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({ "zh-CN-XiaoxiaoNeural": "晓晓" }));
}
