//! Integration tests for HttpGenerator against a mocked generation endpoint

use std::time::Duration;

use negotiation_core::{Scenario, Turn};
use negotiation_llm::{
    ChatOutcome, GenerationConfig, GenerationError, HttpGenerator, NegotiationSession,
    TextGenerator,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_generate_sends_prompt_and_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "inputs": "prompt<sep>",
            "parameters": {
                "max_new_tokens": 32,
                "top_k": 100,
                "num_beams": 5,
                "do_sample": true
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "generated_text": "판매자: 네<sep>"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(format!("{}/", mock_server.uri())).with_api_key("test-key");
    let config = GenerationConfig::default().with_max_new_tokens(32);

    let text = generator
        .generate("prompt<sep>", &config)
        .await
        .expect("generate");
    assert_eq!(text, "판매자: 네<sep>");
}

#[tokio::test]
async fn test_generate_accepts_batch_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "generated_text": "첫 번째" },
            { "generated_text": "두 번째" }
        ])))
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let text = generator
        .generate("p", &GenerationConfig::default())
        .await
        .expect("generate");
    assert_eq!(text, "첫 번째");
}

#[tokio::test]
async fn test_generate_surfaces_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let err = generator
        .generate("p", &GenerationConfig::default())
        .await
        .unwrap_err();
    match err {
        GenerationError::Api(msg) => {
            assert!(msg.contains("503"));
            assert!(msg.contains("model loading"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let config = GenerationConfig {
        top_p: 0.0,
        ..Default::default()
    };
    let result = generator.generate("p", &config).await;
    assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
}

#[tokio::test]
async fn test_session_over_http_generator() {
    let mock_server = MockServer::start().await;
    let scenario = Scenario::new("자전거", "중고 자전거 판매합니다");
    let expected_prompt =
        negotiation_core::format_dialogue(&scenario, &[Turn::buyer("가격이 얼마인가요?")]);

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_partial_json(serde_json::json!({ "inputs": expected_prompt })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "generated_text": "판매자: 5만원입니다<sep>"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let mut session = NegotiationSession::new(scenario);
    let outcome = session
        .submit("가격이 얼마인가요?", &generator, &GenerationConfig::default())
        .await
        .expect("submit");

    assert_eq!(outcome, ChatOutcome::Reply("5만원입니다".to_string()));
    assert_eq!(
        session.prompt().expect("prompt"),
        "판매 상품: 자전거\n상품 설명: 중고 자전거 판매합니다\n구매자: 가격이 얼마인가요?<sep>판매자: 5만원입니다<sep>"
    );
}

#[tokio::test]
async fn test_custom_client_timeout_applies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "generated_text": "늦은 답" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .expect("client");
    let generator = HttpGenerator::new(format!("{}//", mock_server.uri())).with_client(client);
    assert_eq!(generator.base_url(), mock_server.uri());

    let err = generator
        .generate("p", &GenerationConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Http(ref e) if e.is_timeout()));
}
