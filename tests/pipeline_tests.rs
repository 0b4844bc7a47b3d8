//! End-to-end pipeline tests against stubbed HTTP endpoints

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use minute_taker::application::ports::{MinutesExtractor, Transcriber, TranscriptionError};
use minute_taker::application::{ProcessCallbacks, ProcessError, ProcessFilesUseCase, ProcessInput};
use minute_taker::domain::extraction::ExtractionMode;
use minute_taker::domain::media::UploadedMedia;
use minute_taker::infrastructure::{ChatExtractor, WhisperTranscriber};

fn media(name: &str) -> UploadedMedia {
    UploadedMedia::new(name, vec![0u8; 32])
}

/// Stub one transcription response, matched on the uploaded filename
/// (present in the multipart content-disposition header)
async fn stub_transcription(server: &MockServer, filename: &str, text: &str) {
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(body_string_contains(filename))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "text": text })))
        .mount(server)
        .await;
}

/// Stub one chat completion response, matched on a distinctive fragment of
/// the mode's system instruction
async fn stub_extraction(server: &MockServer, mode: ExtractionMode, reply: &str) {
    let fragment = match mode {
        ExtractionMode::Summary => "concise abstract paragraph",
        ExtractionMode::KeyPoints => "distilling information into key points",
        ExtractionMode::ActionItems => "extracting action items",
        ExtractionMode::Sentiment => "emotion analysis",
    };

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains(fragment))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": reply } }]
        })))
        .mount(server)
        .await;
}

fn use_case_against(server: &MockServer) -> ProcessFilesUseCase<WhisperTranscriber, ChatExtractor> {
    let transcriber =
        WhisperTranscriber::with_model("test-key", "whisper-1").with_base_url(server.uri());
    let extractor = ChatExtractor::with_model("test-key", "gpt-4").with_base_url(server.uri());
    ProcessFilesUseCase::new(transcriber, extractor)
}

#[tokio::test]
async fn full_pipeline_produces_transcripts_and_minutes() {
    let server = MockServer::start().await;

    stub_transcription(&server, "first.mp3", "foo").await;
    stub_transcription(&server, "second.mp3", "bar").await;
    stub_extraction(&server, ExtractionMode::Summary, "the summary").await;
    stub_extraction(&server, ExtractionMode::KeyPoints, "the key points").await;
    stub_extraction(&server, ExtractionMode::ActionItems, "the action items").await;
    stub_extraction(&server, ExtractionMode::Sentiment, "neutral").await;

    let use_case = use_case_against(&server);
    let input = ProcessInput {
        files: vec![media("first.mp3"), media("second.mp3")],
        per_file_summaries: false,
    };

    let output = use_case
        .execute(input, ProcessCallbacks::default())
        .await
        .unwrap();

    // Per-file transcripts in upload order
    assert_eq!(output.transcripts.len(), 2);
    assert_eq!(output.transcripts[0].filename(), "first.mp3");
    assert_eq!(output.transcripts[0].text(), "foo");
    assert_eq!(output.transcripts[1].text(), "bar");

    // Minutes are exact pass-through of what the completion endpoint returned
    assert_eq!(output.minutes.abstract_summary(), "the summary");
    assert_eq!(output.minutes.key_points(), "the key points");
    assert_eq!(output.minutes.action_items(), "the action items");
    assert_eq!(output.minutes.sentiment(), "neutral");
}

#[tokio::test]
async fn extraction_requests_carry_concatenated_transcript() {
    let server = MockServer::start().await;

    stub_transcription(&server, "first.mp3", "foo").await;
    stub_transcription(&server, "second.mp3", "bar").await;

    // Every extraction request must send the separator-free concatenation
    // "foobar" as user content, or nothing matches and the run fails.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("\"content\":\"foobar\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
        })))
        .expect(4)
        .mount(&server)
        .await;

    let use_case = use_case_against(&server);
    let input = ProcessInput {
        files: vec![media("first.mp3"), media("second.mp3")],
        per_file_summaries: false,
    };

    let output = use_case
        .execute(input, ProcessCallbacks::default())
        .await
        .unwrap();
    assert_eq!(output.minutes.abstract_summary(), "ok");
}

#[tokio::test]
async fn one_failing_file_aborts_without_extraction() {
    let server = MockServer::start().await;

    stub_transcription(&server, "good.mp3", "fine").await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(body_string_contains("broken.mp3"))
        .respond_with(ResponseTemplate::new(400).set_body_string("unsupported format"))
        .mount(&server)
        .await;

    // The completion endpoint must never be hit
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let use_case = use_case_against(&server);
    let input = ProcessInput {
        files: vec![media("good.mp3"), media("broken.mp3"), media("later.mp3")],
        per_file_summaries: false,
    };

    let result = use_case.execute(input, ProcessCallbacks::default()).await;
    assert!(matches!(result, Err(ProcessError::Transcription(_))));
}

#[tokio::test]
async fn per_file_summaries_issue_extra_summary_calls() {
    let server = MockServer::start().await;

    stub_transcription(&server, "only.mp3", "foo").await;
    stub_extraction(&server, ExtractionMode::KeyPoints, "k").await;
    stub_extraction(&server, ExtractionMode::ActionItems, "a").await;
    stub_extraction(&server, ExtractionMode::Sentiment, "n").await;

    // One summary for the file, one for the aggregate
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("concise abstract paragraph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "s" } }]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let use_case = use_case_against(&server);
    let input = ProcessInput {
        files: vec![media("only.mp3")],
        per_file_summaries: true,
    };

    let output = use_case
        .execute(input, ProcessCallbacks::default())
        .await
        .unwrap();
    assert_eq!(output.file_summaries.len(), 1);
    assert_eq!(output.file_summaries[0].filename, "only.mp3");
    assert_eq!(output.file_summaries[0].summary, "s");
}

#[tokio::test]
async fn transcriber_maps_unauthorized_to_invalid_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let transcriber = WhisperTranscriber::new("bad-key").with_base_url(server.uri());
    let result = transcriber.transcribe(&media("a.mp3")).await;

    assert!(matches!(result, Err(TranscriptionError::InvalidApiKey)));
}

#[tokio::test]
async fn transcriber_trims_whitespace() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "text": "  spaced out  " })),
        )
        .mount(&server)
        .await;

    let transcriber = WhisperTranscriber::new("key").with_base_url(server.uri());
    let text = transcriber.transcribe(&media("a.mp3")).await.unwrap();
    assert_eq!(text, "spaced out");
}

#[tokio::test]
async fn extractor_maps_rate_limit() {
    use minute_taker::application::ports::ExtractionError;

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let extractor = ChatExtractor::new("key").with_base_url(server.uri());
    let result = extractor.extract("t", ExtractionMode::Summary).await;

    assert!(matches!(result, Err(ExtractionError::RateLimited)));
}

#[tokio::test]
async fn extractor_surfaces_api_error_body() {
    use minute_taker::application::ports::ExtractionError;

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": { "message": "model overloaded" }
        })))
        .mount(&server)
        .await;

    let extractor = ChatExtractor::new("key").with_base_url(server.uri());
    let result = extractor.extract("t", ExtractionMode::Sentiment).await;

    match result {
        Err(ExtractionError::ApiError(message)) => assert_eq!(message, "model overloaded"),
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}
