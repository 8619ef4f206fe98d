use std::thread;
use std::time::{Duration, Instant};

use mediaclean_engine::{
    EngineEvent, EngineHandle, MediaKind, SubmitRequest, SubmitResponse, SubmitSettings,
    SubmitSource,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn engine_handle_delivers_completion_events() {
    // The handle owns its own runtime; this one only hosts the mock server.
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"status":"completed","media_url":"/out/1.mp3","file_type":"audio"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;
        server
    });

    let engine = EngineHandle::new(SubmitSettings {
        server_url: server.uri(),
        ..SubmitSettings::default()
    });
    engine.submit(SubmitRequest {
        source: SubmitSource::Url("https://media.example/watch".to_string()),
    });

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(EngineEvent::SubmitCompleted { result }) = engine.try_recv() {
            assert_eq!(
                result.expect("completed result"),
                SubmitResponse::Completed {
                    media_url: "/out/1.mp3".to_string(),
                    kind: MediaKind::Audio,
                }
            );
            break;
        }
        assert!(Instant::now() < deadline, "no engine event within deadline");
        thread::sleep(Duration::from_millis(20));
    }
}
