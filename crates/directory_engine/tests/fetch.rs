use std::time::Duration;

use directory_core::CandidateId;
use directory_engine::{
    DirectorySource, FailureKind, FetchSettings, ReqwestSource, CANDIDATES_PATH, JOBS_PATH,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> ReqwestSource {
    ReqwestSource::new(FetchSettings::with_base_url(server.uri())).expect("client")
}

#[tokio::test]
async fn fetches_and_decodes_candidates() {
    let server = MockServer::start().await;
    let body = r#"[
        [1, {"candidate": {"fullName": "Bob", "primaryProfession": "Engineer"}, "skills": [{"name": "Go"}]}],
        [2, {"candidate": {"fullName": "Ann", "primaryProfession": "Engineer"}, "skills": [{"name": "Rust"}]}]
    ]"#;
    Mock::given(method("GET"))
        .and(path(CANDIDATES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let candidates = source_for(&server)
        .fetch_candidates()
        .await
        .expect("fetch ok");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1].id, CandidateId::Number(2));
    assert_eq!(candidates[1].profile.full_name.as_deref(), Some("Ann"));
    assert_eq!(candidates[1].skills[0].name, "Rust");
}

#[tokio::test]
async fn fetches_job_titles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"["Engineer", "Designer"]"#, "application/json; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let jobs = source_for(&server).fetch_jobs().await.expect("fetch ok");
    assert_eq!(jobs, vec!["Engineer".to_string(), "Designer".to_string()]);
}

#[tokio::test]
async fn fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CANDIDATES_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_candidates().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn fails_on_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"jobs\": 1}", "application/json"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn rejects_html_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_jobs().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("[]", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::with_base_url(server.uri())
    };
    let source = ReqwestSource::new(settings).expect("client");

    let err = source.fetch_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("[\"0123456789\"]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::with_base_url(server.uri())
    };
    let source = ReqwestSource::new(settings).expect("client");

    let err = source.fetch(JOBS_PATH).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(14)
        }
    );
}

#[tokio::test]
async fn invalid_base_url_is_reported() {
    let source = ReqwestSource::new(FetchSettings::with_base_url("::nope::")).expect("client");
    let err = source.fetch_candidates().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetch_reports_response_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"["Nurse"]"#, "application/json"))
        .mount(&server)
        .await;

    let output = source_for(&server).fetch(JOBS_PATH).await.expect("fetch ok");

    assert_eq!(output.bytes, br#"["Nurse"]"#.to_vec());
    assert_eq!(output.metadata.url, format!("{}{}", server.uri(), JOBS_PATH));
    assert_eq!(output.metadata.byte_len, 9);
    assert_eq!(output.metadata.content_type.as_deref(), Some("application/json"));
}
