//! Anthropic provider wire format tests.

use outreach::credentials::AnthropicAuth;
use outreach::providers::anthropic::{build_request, parse_response, AnthropicProvider};
use outreach::providers::{
    CompletionRequest, ContentPart, LlmProvider, Message, ProviderError, StopReason,
};
use serde_json::json;

use crate::support::serve_once;

fn simple_request() -> CompletionRequest {
    CompletionRequest {
        messages: vec![Message::user("Hello")],
        max_tokens: Some(2500),
    }
}

#[test]
fn build_request_sets_model_and_single_user_turn() {
    let req = build_request("claude-sonnet-4-20250514", &simple_request());
    assert_eq!(req.model, "claude-sonnet-4-20250514");
    assert_eq!(req.max_tokens, 2500);
    assert_eq!(req.messages.len(), 1);
    assert_eq!(req.messages[0].role, "user");
    assert_eq!(req.messages[0].content, "Hello");

    let wire = serde_json::to_value(&req).expect("serialize");
    assert_eq!(wire["messages"][0]["role"], "user");
}

#[test]
fn build_request_default_max_tokens() {
    let mut request = simple_request();
    request.max_tokens = None;
    assert_eq!(build_request("model", &request).max_tokens, 4096);
}

#[test]
fn parse_response_text_only() {
    let body = json!({
        "content": [{"type": "text", "text": "Hello world"}],
        "model": "claude-sonnet-4-20250514",
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 5}
    });
    let resp = parse_response(&body.to_string()).expect("should parse");
    assert_eq!(resp.first_text(), Some("Hello world"));
    assert_eq!(resp.stop_reason, StopReason::EndTurn);
    assert_eq!(resp.usage.input_tokens, 10);
    assert_eq!(resp.usage.output_tokens, 5);
}

#[test]
fn parse_response_keeps_non_text_blocks_by_type() {
    let body = json!({
        "content": [
            {"type": "thinking", "thinking": "hmm", "signature": "abc"},
            {"type": "text", "text": "answer"}
        ],
        "model": "m",
        "stop_reason": "max_tokens",
        "usage": {"input_tokens": 1, "output_tokens": 1}
    });
    let resp = parse_response(&body.to_string()).expect("should parse");
    assert_eq!(
        resp.content[0],
        ContentPart::Other {
            kind: "thinking".to_owned()
        }
    );
    assert_eq!(resp.first_text(), Some("answer"));
    assert_eq!(resp.stop_reason, StopReason::MaxTokens);
}

#[test]
fn parse_response_with_zero_blocks_has_no_text() {
    let body = json!({"content": [], "model": "m", "stop_reason": "end_turn"});
    let resp = parse_response(&body.to_string()).expect("should parse");
    assert!(resp.content.is_empty());
    assert_eq!(resp.first_text(), None);
}

#[test]
fn parse_response_invalid_json() {
    assert!(matches!(
        parse_response("not json"),
        Err(ProviderError::Parse(_))
    ));
}

#[test]
fn provider_reports_model_and_endpoint() {
    let provider = AnthropicProvider::new(
        "claude-sonnet-4-20250514".to_owned(),
        AnthropicAuth::ApiKey("test-api-key".to_owned()),
    );
    assert_eq!(provider.model_id(), "claude-sonnet-4-20250514");
    assert_eq!(provider.api_base(), "https://api.anthropic.com/v1/messages");
    assert!(!format!("{provider:?}").contains("test-api-key"));
}

#[tokio::test]
async fn complete_against_local_endpoint() {
    let body = json!({
        "content": [{"type": "text", "text": "---\n**Variation 1**\nHi"}],
        "model": "claude-sonnet-4-20250514",
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 3, "output_tokens": 4}
    })
    .to_string();
    let url = serve_once("200 OK", "application/json", &body).await;

    let provider = AnthropicProvider::new(
        "claude-sonnet-4-20250514".to_owned(),
        AnthropicAuth::ApiKey("test-api-key".to_owned()),
    )
    .with_api_base(url);

    let resp = provider
        .complete(simple_request())
        .await
        .expect("local endpoint should answer");
    assert_eq!(resp.first_text(), Some("---\n**Variation 1**\nHi"));
    assert_eq!(resp.usage.output_tokens, 4);
}

#[tokio::test]
async fn complete_surfaces_status_errors() {
    let url = serve_once(
        "401 Unauthorized",
        "application/json",
        r#"{"type":"error","error":{"type":"authentication_error"}}"#,
    )
    .await;
    let provider = AnthropicProvider::new(
        "m".to_owned(),
        AnthropicAuth::ApiKey("bad".to_owned()),
    )
    .with_api_base(url);

    match provider.complete(simple_request()).await {
        Err(ProviderError::HttpStatus { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("authentication_error"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
