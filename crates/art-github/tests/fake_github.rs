//! Loader tests against a local fake of the GitHub REST API.
//!
//! A `tiny_http` server on `127.0.0.1:0` answers fixed routes; the client is
//! pointed at it through `http.api_base`.

use std::collections::HashMap;

use art_config::GalleryConfig;
use art_github::{FetchError, GitHubClient};
use pretty_assertions::assert_eq;

const CONTENTS_PATH: &str = "/repos/octo/gallery/contents/img?ref=main";
const ISSUES_PATH: &str = "/repos/octo/gallery/issues?state=open&per_page=100";

const CONTENTS: &str = r#"[
    { "name": "10-Коти.jpg", "path": "img/10-Коти.jpg", "type": "file" },
    { "name": "2-Коти.jpg", "path": "img/2-Коти.jpg", "type": "file" },
    { "name": "1-Авто.png", "path": "img/1-Авто.png", "type": "file" },
    { "name": "notes.txt", "path": "img/notes.txt", "type": "file" },
    { "name": "old", "path": "img/old", "type": "dir" }
]"#;

const ISSUES: &str = r#"[
    { "title": "Бронь: 2-Коти.jpg" },
    { "title": "Бронь: 1-Авто.png", "pull_request": { "url": "x" } },
    { "title": "Питання" }
]"#;

/// Serve `routes` (request path+query → status, body) until the test exits.
fn serve(routes: HashMap<&'static str, (u16, &'static str)>) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake github");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("fake github port");

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let (status, body) = routes
                .get(request.url())
                .copied()
                .unwrap_or((404, r#"{"message":"Not Found"}"#));
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    format!("http://127.0.0.1:{port}")
}

fn client(api_base: String) -> GitHubClient {
    let mut config = GalleryConfig::default();
    config.repo.owner = "octo".to_string();
    config.repo.name = "gallery".to_string();
    config.http.api_base = api_base;
    config.http.timeout_secs = 5;
    GitHubClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn catalog_is_filtered_and_sorted() {
    let base = serve(HashMap::from([(CONTENTS_PATH, (200, CONTENTS))]));
    let catalog = client(base).fetch_catalog().await.unwrap();

    let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["1-Авто.png", "2-Коти.jpg", "10-Коти.jpg"]);
}

#[tokio::test]
async fn reservations_skip_pull_requests() {
    let base = serve(HashMap::from([(ISSUES_PATH, (200, ISSUES))]));
    let reserved = client(base).fetch_reservations().await.unwrap();

    assert_eq!(reserved.sorted(), vec!["2-Коти.jpg"]);
}

#[tokio::test]
async fn missing_directory_is_a_status_error_naming_the_url() {
    let base = serve(HashMap::new());
    let err = client(base.clone()).fetch_catalog().await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert_eq!(err.url(), format!("{base}{CONTENTS_PATH}"));
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let base = serve(HashMap::from([(CONTENTS_PATH, (200, r#"{"type":"file"}"#))]));
    let err = client(base).fetch_catalog().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let err = client("http://127.0.0.1:9".to_string())
        .fetch_reservations()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }));
    assert_eq!(err.status(), None);
}
