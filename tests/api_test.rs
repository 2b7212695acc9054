//! End-to-end tests of the HTTP surface against a scripted upstream

mod common;

use common::{app, app_with_cors, json_body, Script, ScriptedProvider, ALLOWED_ORIGIN};
use serde_json::json;
use therapist_gateway::cors::CorsPolicy;
use therapist_gateway::llm::{Message, MessageRole};
use therapist_gateway::personas::PersonaRegistry;
use therapist_gateway::routes::MAX_BODY_BYTES;
use warp::http::StatusCode;

#[tokio::test]
async fn test_health() {
    let provider = ScriptedProvider::replying("unused");
    let res = warp::test::request()
        .method("GET")
        .path("/")
        .reply(&app(provider.clone()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        json_body(res.body()),
        json!({"status": "Server is running", "version": env!("CARGO_PKG_VERSION")})
    );
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_list_therapists_in_order() {
    let res = warp::test::request()
        .method("GET")
        .path("/api/therapists")
        .reply(&app(ScriptedProvider::replying("unused")))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res.body());
    let therapists = body["therapists"].as_array().unwrap();
    let ids: Vec<&str> = therapists.iter().map(|t| t["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["dawn", "alex", "maya", "james", "sarah"]);
    assert_eq!(
        therapists[0],
        json!({"id": "dawn", "name": "Dawn", "subtitle": "Every day brings new clarity"})
    );
    // Prompts never leave the server
    assert!(therapists[0].get("system_prompt").is_none());
}

#[tokio::test]
async fn test_chat_forwards_persona_prompt_and_returns_reply() {
    let provider = ScriptedProvider::replying("What feels most stuck right now?");
    let res = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({"message": "I feel stuck", "history": [], "therapist_id": "alex"}))
        .reply(&app(provider.clone()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        json_body(res.body()),
        json!({"response": "What feels most stuck right now?"})
    );

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    let alex = PersonaRegistry::builtin();
    let alex = alex.lookup("alex").unwrap();
    assert_eq!(calls[0].system.as_deref(), Some(alex.system_prompt.as_str()));
    assert_eq!(calls[0].messages, vec![Message::user("I feel stuck")]);
    assert_eq!(calls[0].config.max_tokens, 1000);
    assert_eq!(calls[0].config.temperature, Some(0.7));
}

#[tokio::test]
async fn test_chat_with_history_keeps_order() {
    let provider = ScriptedProvider::replying("Tell me more.");
    let res = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({
            "message": "Work has been hard",
            "history": [
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello, what brings you in?"},
                {"role": "user", "content": "Work has been hard"}
            ],
            "therapist_id": "james"
        }))
        .reply(&app(provider.clone()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let messages = &provider.calls()[0].messages;
    let roles: Vec<MessageRole> = messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        [MessageRole::User, MessageRole::Assistant, MessageRole::User]
    );
    assert_eq!(messages[2].text_content(), "Work has been hard");
}

#[tokio::test]
async fn test_legacy_chat_shape_uses_default_persona() {
    let provider = ScriptedProvider::replying("Good morning.");
    let res = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({"message": "hello"}))
        .reply(&app(provider.clone()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let registry = PersonaRegistry::builtin();
    let dawn = registry.lookup("dawn").unwrap();
    assert_eq!(
        provider.calls()[0].system.as_deref(),
        Some(dawn.system_prompt.as_str())
    );
}

#[tokio::test]
async fn test_chat_unknown_therapist() {
    let provider = ScriptedProvider::replying("unused");
    let res = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({"message": "hi", "history": [], "therapist_id": "freud"}))
        .reply(&app(provider.clone()))
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res.body()), json!({"error": "Invalid therapist ID"}));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_chat_malformed_bodies() {
    let provider = ScriptedProvider::replying("unused");
    let filter = app(provider.clone());

    for body in [
        r#"{"message": "hi""#,
        r#"{"history": [], "therapist_id": "dawn"}"#,
        r#"{"message": 42}"#,
        r#"{"message": "hi", "history": [{"role": "tool", "content": "x"}]}"#,
        r#"{"message": "   "}"#,
        "",
    ] {
        let res = warp::test::request()
            .method("POST")
            .path("/api/chat")
            .header("content-type", "application/json")
            .body(body)
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json_body(res.body()), json!({"error": "Invalid request data"}));
    }
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_chat_upstream_failure_is_500_with_message() {
    let provider = ScriptedProvider::new(Script::Unauthorized("invalid x-api-key".to_string()));
    let res = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({"message": "hi", "therapist_id": "maya"}))
        .reply(&app(provider.clone()))
        .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(res.body()),
        json!({"error": "Authentication error: invalid x-api-key"})
    );
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn test_chat_empty_upstream_reply_is_500() {
    let res = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({"message": "hi"}))
        .reply(&app(ScriptedProvider::new(Script::Empty)))
        .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json_body(res.body())["error"].is_string());
}

#[tokio::test]
async fn test_summarize_uses_summary_prompt() {
    let provider = ScriptedProvider::replying("You explored a recent conflict.");
    let res = warp::test::request()
        .method("POST")
        .path("/api/summarize")
        .json(&json!({
            "messages": [
                {"role": "user", "content": "I argued with my sister"},
                {"role": "assistant", "content": "How did that feel?"}
            ],
            "therapist_id": "sarah"
        }))
        .reply(&app(provider.clone()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        json_body(res.body()),
        json!({"summary": "You explored a recent conflict."})
    );

    let registry = PersonaRegistry::builtin();
    let sarah = registry.lookup("sarah").unwrap();
    let calls = provider.calls();
    assert_eq!(calls[0].system.as_deref(), Some(sarah.summary_prompt.as_str()));
    assert_eq!(
        calls[0].messages,
        vec![
            Message::user("I argued with my sister"),
            Message::assistant("How did that feel?")
        ]
    );
}

#[tokio::test]
async fn test_summarize_invalid_requests() {
    let provider = ScriptedProvider::replying("unused");
    let filter = app(provider.clone());

    let cases = [
        (json!({"messages": [{"role": "user", "content": "x"}]}), "Invalid request data"),
        (json!({"therapist_id": "dawn"}), "Invalid request data"),
        (json!({"messages": [], "therapist_id": "dawn"}), "Invalid request data"),
        (
            json!({"messages": [{"role": "user", "content": "x"}], "therapist_id": "nobody"}),
            "Invalid therapist ID",
        ),
    ];

    for (body, expected) in cases {
        let res = warp::test::request()
            .method("POST")
            .path("/api/summarize")
            .json(&body)
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json_body(res.body()), json!({"error": expected}));
    }
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_preflight_never_calls_upstream() {
    let provider = ScriptedProvider::replying("unused");
    let filter = app(provider.clone());

    for path in ["/api/chat", "/api/summarize", "/anything/else"] {
        let res = warp::test::request()
            .method("OPTIONS")
            .path(path)
            .header("origin", ALLOWED_ORIGIN)
            .header("access-control-request-method", "POST")
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::OK, "path: {path}");
        assert_eq!(json_body(res.body()), json!({"status": "ok"}));
        let headers = res.headers();
        assert_eq!(headers["access-control-allow-origin"], ALLOWED_ORIGIN);
        assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
        assert_eq!(headers["access-control-allow-credentials"], "true");
    }
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_cors_headers_on_errors_and_successes() {
    let filter = app(ScriptedProvider::replying("Hi"));

    let ok = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .header("origin", ALLOWED_ORIGIN)
        .json(&json!({"message": "hi"}))
        .reply(&filter)
        .await;
    assert_eq!(ok.headers()["access-control-allow-origin"], ALLOWED_ORIGIN);

    let bad = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .header("origin", ALLOWED_ORIGIN)
        .json(&json!({"message": "hi", "therapist_id": "nobody"}))
        .reply(&filter)
        .await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    assert_eq!(bad.headers()["access-control-allow-origin"], ALLOWED_ORIGIN);

    let missing = warp::test::request()
        .method("GET")
        .path("/nope")
        .header("origin", ALLOWED_ORIGIN)
        .reply(&filter)
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.headers()["access-control-allow-origin"], ALLOWED_ORIGIN);
}

#[tokio::test]
async fn test_disallowed_origin_gets_no_allow_header() {
    let res = warp::test::request()
        .method("GET")
        .path("/api/therapists")
        .header("origin", "https://evil.test")
        .reply(&app(ScriptedProvider::replying("unused")))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get("access-control-allow-origin").is_none());
    assert_eq!(res.headers()["vary"], "Origin");
}

#[tokio::test]
async fn test_wildcard_policy() {
    let res = warp::test::request()
        .method("GET")
        .path("/")
        .header("origin", "https://anywhere.test")
        .reply(&app_with_cors(
            ScriptedProvider::replying("unused"),
            CorsPolicy::parse("*"),
        ))
        .await;

    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    assert!(res.headers().get("access-control-allow-credentials").is_none());
}

#[tokio::test]
async fn test_unknown_path_and_wrong_method() {
    let filter = app(ScriptedProvider::replying("unused"));

    let missing = warp::test::request()
        .method("GET")
        .path("/api/unknown")
        .reply(&filter)
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(missing.body()), json!({"error": "Not found"}));

    let wrong = warp::test::request()
        .method("GET")
        .path("/api/chat")
        .reply(&filter)
        .await;
    assert_eq!(wrong.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json_body(wrong.body()), json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let provider = ScriptedProvider::replying("unused");
    let message = "a".repeat(MAX_BODY_BYTES as usize + 1);
    let res = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({"message": message}))
        .reply(&app(provider.clone()))
        .await;

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(provider.calls().is_empty());
}
