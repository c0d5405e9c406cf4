// tests/http_backend.rs
//
// HttpBackend against a local mock server: paths, query strings, bodies,
// and how error responses surface.

use mockito::{Matcher, Server};
use serde_json::json;
use social_dash::{
    api::{Backend, HttpBackend, RedditParams, ScrapeRequest, YoutubeParams},
    config::options::AppOptions,
    error::ApiError,
    platform::Platform,
};

fn backend_for(server: &Server) -> HttpBackend {
    let mut options = AppOptions::default();
    options.endpoints.scrape_base = server.url();
    options.endpoints.analysis_base = server.url();
    HttpBackend::new(&options).unwrap()
}

#[test]
fn youtube_scrape_sends_all_params() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/scrape-comments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("video_ids".into(), "gQc58vGHlvs,p4ldj_c8yIQ".into()),
            Matcher::UrlEncoded("query".into(), "rust gui".into()),
            Matcher::UrlEncoded("comment_limit".into(), "100".into()),
            Matcher::UrlEncoded("search_limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Saved 200 comments"}"#)
        .create();

    let req = ScrapeRequest::Youtube(YoutubeParams {
        video_ids: "gQc58vGHlvs,p4ldj_c8yIQ".into(),
        query: "rust gui".into(),
        ..YoutubeParams::default()
    });
    let ack = backend_for(&server).scrape(&req).unwrap();

    m.assert();
    assert_eq!(ack.message, "Saved 200 comments");
}

#[test]
fn reddit_scrape_hits_reddit_path() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/scrape-reddit")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "egui".into()),
            Matcher::UrlEncoded("comment_limit".into(), "300".into()),
            Matcher::UrlEncoded("search_limit".into(), "100".into()),
        ]))
        .with_body(r#"{"message":"ok"}"#)
        .create();

    let req = ScrapeRequest::Reddit(RedditParams { query: "egui".into(), ..RedditParams::default() });
    backend_for(&server).scrape(&req).unwrap();
    m.assert();
}

#[test]
fn preview_passes_limit_and_reads_pandas_nan() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/get-csv-head")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_body(r#"[{"video_id":"abc","comment":"hi","likes":3,"reply_count":NaN}]"#)
        .create();

    let rows = backend_for(&server).preview(Platform::Youtube, 10).unwrap();

    m.assert();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cell("likes"), "3");
    assert_eq!(rows[0].cell("reply_count"), "");
    assert_eq!(rows[0].cell("published_at"), "");
}

#[test]
fn reddit_preview_uses_its_own_path() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/get-reddit-csv-head")
        .match_query(Matcher::UrlEncoded("limit".into(), "3".into()))
        .with_body("[]")
        .create();

    let rows = backend_for(&server).preview(Platform::Reddit, 3).unwrap();
    m.assert();
    assert!(rows.is_empty());
}

#[test]
fn delete_sends_platform_param() {
    let mut server = Server::new();
    let m = server
        .mock("DELETE", "/delete-file")
        .match_query(Matcher::UrlEncoded("platform".into(), "reddit".into()))
        .with_body(r#"{"status":"success","message":"reddit file deleted"}"#)
        .create();

    let ack = backend_for(&server).delete_artifact(Platform::Reddit).unwrap();
    m.assert();
    assert_eq!(ack.status.as_deref(), Some("success"));
}

#[test]
fn delete_error_carries_server_text() {
    let mut server = Server::new();
    let _m = server
        .mock("DELETE", "/delete-file")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":"File not found"}"#)
        .create();

    let err = backend_for(&server).delete_artifact(Platform::Youtube).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Request failed with status code 404: File not found");
}

#[test]
fn analyze_posts_json_platform() {
    let mut server = Server::new();
    let m = server
        .mock("POST", "/analyze")
        .match_body(Matcher::Json(json!({ "platform": "youtube" })))
        .with_body(
            json!({
                "sentiments": [0.1, 0.3],
                "tfidf": [["rust", 0.42]],
                "wordcloud": ""
            })
            .to_string(),
        )
        .create();

    let bundle = backend_for(&server).analyze(Platform::Youtube).unwrap();

    m.assert();
    assert_eq!(bundle.sentiments, vec![0.1, 0.3]);
    assert_eq!(bundle.tfidf, vec![("rust".to_string(), 0.42)]);
    assert!(bundle.topics.is_empty());
    assert!(bundle.wordcloud_b64().is_none());
    assert!(bundle.network.is_empty());
}

#[test]
fn server_error_without_body_is_bare_status() {
    let mut server = Server::new();
    let _m = server.mock("POST", "/analyze").with_status(500).create();

    let err = backend_for(&server).analyze(Platform::Reddit).unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status code 500");
}

#[test]
fn garbage_body_is_a_decode_error() {
    let mut server = Server::new();
    let _m = server.mock("POST", "/analyze").with_body("<html>oops</html>").create();

    let err = backend_for(&server).analyze(Platform::Reddit).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn unreachable_service_is_transport_error() {
    let mut options = AppOptions::default();
    // reserved port, nothing listens there
    options.endpoints.scrape_base = "http://127.0.0.1:9".into();
    let backend = HttpBackend::new(&options).unwrap();

    let err = backend.preview(Platform::Youtube, 10).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
