use std::time::Duration;

use bytes::Bytes;
use mediaclean_engine::{
    MediaKind, ReqwestSubmitter, SubmitFailureKind, SubmitRequest, SubmitResponse, SubmitSettings,
    SubmitSource, Submitter,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> SubmitSettings {
    SubmitSettings {
        server_url: server.uri(),
        ..SubmitSettings::default()
    }
}

fn url_request(url: &str) -> SubmitRequest {
    SubmitRequest {
        source: SubmitSource::Url(url.to_string()),
    }
}

#[tokio::test]
async fn url_submission_posts_the_url_field_and_parses_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("name=\"url\""))
        .and(body_string_contains("https://media.example/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"completed","media_url":"/out/1.mp3","file_type":"audio"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let response = submitter
        .submit(&url_request("https://media.example/watch"))
        .await
        .expect("submit ok");

    assert_eq!(
        response,
        SubmitResponse::Completed {
            media_url: "/out/1.mp3".to_string(),
            kind: MediaKind::Audio,
        }
    );
}

#[tokio::test]
async fn file_submission_posts_the_file_part_with_its_filename() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"clip.mp4\""))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"completed","media_url":"/out/clip.mp4","file_type":"video"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let response = submitter
        .submit(&SubmitRequest {
            source: SubmitSource::File {
                name: "clip.mp4".to_string(),
                bytes: Bytes::from_static(b"fake mp4 bytes"),
            },
        })
        .await
        .expect("submit ok");

    assert_eq!(
        response,
        SubmitResponse::Completed {
            media_url: "/out/clip.mp4".to_string(),
            kind: MediaKind::Video,
        }
    );
}

#[tokio::test]
async fn file_submission_never_carries_a_url_field() {
    let server = MockServer::start().await;
    // The mock only matches when no `url` part is present.
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("name=\"url\""))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"completed","media_url":"/out/clip.mp4","file_type":"video"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let response = submitter
        .submit(&SubmitRequest {
            source: SubmitSource::File {
                name: "clip.mp4".to_string(),
                bytes: Bytes::from_static(b"fake mp4 bytes"),
            },
        })
        .await;

    assert!(response.is_ok());
}

#[tokio::test]
async fn rejected_status_surfaces_the_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"error","message":"Invalid URL provided."}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let response = submitter
        .submit(&url_request("not-a-url"))
        .await
        .expect("submit ok");

    assert_eq!(
        response,
        SubmitResponse::Rejected {
            message: Some("Invalid URL provided.".to_string()),
        }
    );
}

#[tokio::test]
async fn rejected_status_without_message_maps_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"status":"failed"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let response = submitter
        .submit(&url_request("https://media.example/watch"))
        .await
        .expect("submit ok");

    assert_eq!(response, SubmitResponse::Rejected { message: None });
}

#[tokio::test]
async fn completed_response_missing_fields_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"completed","file_type":"audio"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let err = submitter
        .submit(&url_request("https://media.example/watch"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, SubmitFailureKind::MalformedResponse);
}

#[tokio::test]
async fn unknown_file_type_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"completed","media_url":"/out/1.bin","file_type":"image"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let err = submitter
        .submit(&url_request("https://media.example/watch"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, SubmitFailureKind::MalformedResponse);
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let err = submitter
        .submit(&url_request("https://media.example/watch"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, SubmitFailureKind::MalformedResponse);
}

#[tokio::test]
async fn http_error_status_is_reported_as_such() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let err = submitter
        .submit(&url_request("https://media.example/watch"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, SubmitFailureKind::HttpStatus(500));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(r#"{"status":"failed"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = SubmitSettings {
        server_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..SubmitSettings::default()
    };
    let submitter = ReqwestSubmitter::new(settings);
    let err = submitter
        .submit(&url_request("https://media.example/watch"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, SubmitFailureKind::Timeout);
}

#[tokio::test]
async fn bad_server_url_fails_before_any_request() {
    let settings = SubmitSettings {
        server_url: "not a url".to_string(),
        ..SubmitSettings::default()
    };
    let submitter = ReqwestSubmitter::new(settings);
    let err = submitter
        .submit(&url_request("https://media.example/watch"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, SubmitFailureKind::InvalidServerUrl);
}
