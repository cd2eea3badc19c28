mod mocks;

use mocks::generator::MockGenerator;
use yt_insight::{AnalyzeError, Dispatcher, PromptRegistry, PromptTemplate, VideoRequest};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn request(url: &str, prompt_id: &str) -> VideoRequest {
    VideoRequest {
        url: url.to_string(),
        prompt_id: prompt_id.to_string(),
    }
}

// ─── Happy path ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_analyze_returns_backend_text() {
    let generator = MockGenerator::new("A short summary of the video.");
    let calls = generator.calls.clone();
    let dispatcher = Dispatcher::new(PromptRegistry::builtin(), generator);

    let result = dispatcher.analyze(&request(WATCH_URL, "summarize")).await;
    assert!(result.is_ok(), "Analyze should succeed: {:?}", result.err());
    assert_eq!(result.unwrap().response, "A short summary of the video.");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "Backend should be called exactly once");
}

#[tokio::test]
async fn test_backend_receives_registered_instruction_and_video_id() {
    let registry = PromptRegistry::builtin();

    for prompt_id in registry.ids() {
        let generator = MockGenerator::new("ok");
        let calls = generator.calls.clone();
        let dispatcher = Dispatcher::new(registry, generator);

        dispatcher
            .analyze(&request("https://youtu.be/dQw4w9WgXcQ", prompt_id))
            .await
            .expect("Analyze should succeed");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (instruction, video_id) = &calls[0];
        assert_eq!(instruction, registry.get(prompt_id).unwrap().instruction);
        assert_eq!(video_id, "dQw4w9WgXcQ");
    }
}

#[tokio::test]
async fn test_custom_registry_is_used() {
    static TEMPLATES: &[PromptTemplate] = &[PromptTemplate {
        id: "haiku",
        instruction: "Describe the video as a haiku.",
    }];

    let generator = MockGenerator::new("five seven five");
    let calls = generator.calls.clone();
    let dispatcher = Dispatcher::new(PromptRegistry::new(TEMPLATES), generator);

    let response = dispatcher
        .analyze(&request(WATCH_URL, "haiku"))
        .await
        .expect("Analyze should succeed");
    assert_eq!(response.response, "five seven five");
    assert_eq!(calls.lock().unwrap()[0].0, "Describe the video as a haiku.");

    let err = dispatcher
        .analyze(&request(WATCH_URL, "summarize"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid prompt_id. Please use one of: 'haiku'."
    );
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let generator = MockGenerator::new("deterministic");
    let calls = generator.calls.clone();
    let dispatcher = Dispatcher::new(PromptRegistry::builtin(), generator);
    let req = request(WATCH_URL, "qa");

    let first = dispatcher.analyze(&req).await.unwrap();
    let second = dispatcher.analyze(&req).await.unwrap();
    assert_eq!(first, second);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1], "Backend inputs should not drift between calls");
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_prompt_id_skips_backend() {
    for prompt_id in ["summary", "Summarize", "", "actionable_takeaways"] {
        let generator = MockGenerator::new("should not be returned");
        let calls = generator.calls.clone();
        let dispatcher = Dispatcher::new(PromptRegistry::builtin(), generator);

        let err = dispatcher
            .analyze(&request(WATCH_URL, prompt_id))
            .await
            .expect_err("Unknown prompt_id should be rejected");

        assert!(matches!(err, AnalyzeError::InvalidPromptId { .. }));
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_string(),
            "Invalid prompt_id. Please use one of: 'summarize', 'actionable', 'quotes', 'qa'."
        );
        assert!(
            calls.lock().unwrap().is_empty(),
            "Backend should not be called for prompt_id {prompt_id:?}"
        );
    }
}

#[tokio::test]
async fn test_invalid_prompt_id_checked_before_url() {
    let generator = MockGenerator::new("unused");
    let dispatcher = Dispatcher::new(PromptRegistry::builtin(), generator);

    let err = dispatcher
        .analyze(&request("https://example.com/video", "nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, AnalyzeError::InvalidPromptId { .. }));
}

#[tokio::test]
async fn test_url_without_video_id_skips_backend() {
    let generator = MockGenerator::new("should not be returned");
    let calls = generator.calls.clone();
    let dispatcher = Dispatcher::new(PromptRegistry::builtin(), generator);

    let err = dispatcher
        .analyze(&request("https://example.com/video", "summarize"))
        .await
        .expect_err("URL without a video id should be rejected");

    assert!(matches!(err, AnalyzeError::VideoIdNotFound { .. }));
    assert_eq!(err.status_code(), 400);
    assert_eq!(
        err.to_string(),
        "Could not extract a YouTube video id from url: https://example.com/video"
    );
    assert!(calls.lock().unwrap().is_empty());
}

// ─── Error propagation ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_backend_failure_is_server_error_with_message() {
    let generator = MockGenerator::failing("API error: 429 - quota exceeded");
    let calls = generator.calls.clone();
    let dispatcher = Dispatcher::new(PromptRegistry::builtin(), generator);

    let err = dispatcher
        .analyze(&request(WATCH_URL, "quotes"))
        .await
        .expect_err("Backend failure should propagate");

    assert!(matches!(err, AnalyzeError::Backend(_)));
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.to_string(), "API error: 429 - quota exceeded");
    assert_eq!(calls.lock().unwrap().len(), 1, "No retries expected");
}

#[tokio::test]
async fn test_failure_does_not_poison_later_requests() {
    let generator = MockGenerator::new("fine");
    let dispatcher = Dispatcher::new(PromptRegistry::builtin(), generator);

    let _ = dispatcher.analyze(&request(WATCH_URL, "bogus")).await;
    let _ = dispatcher
        .analyze(&request("https://example.com/video", "qa"))
        .await;

    let ok = dispatcher
        .analyze(&request(WATCH_URL, "actionable"))
        .await
        .expect("Valid request should still succeed");
    assert_eq!(ok.response, "fine");
}
