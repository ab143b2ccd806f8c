//! Delete integration tests.
//!
//! Run with: `cargo test -p formdrop-api --test delete_test`

mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_delete_listed_submission() {
    let app = setup_test_app().await;
    app.client().post("/submission").text(r#"{"a":1}"#).await;
    let entry = app.submissions().await.remove(0);

    let response = app
        .client()
        .post(&format!("/delete_submission/{}", entry.path))
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.headers().get("location").unwrap(), "/");
    assert!(!app.file(&entry.path).exists());
    assert!(app.submissions().await.is_empty());

    let html = app.client().get("/").await.text();
    assert!(!html.contains(&entry.name));
}

#[tokio::test]
async fn test_delete_accepts_path_with_root_name() {
    let app = setup_test_app().await;
    app.client().post("/submission").text("hello").await;
    let entry = app.submissions().await.remove(0);

    let response = app
        .client()
        .post(&format!("/delete_submission/requests/{}", entry.path))
        .await;

    assert_eq!(response.status_code(), 303);
    assert!(!app.file(&entry.path).exists());
}

#[tokio::test]
async fn test_delete_accepts_get() {
    let app = setup_test_app().await;
    app.client().post("/submission").text("hello").await;
    let entry = app.submissions().await.remove(0);

    let response = app
        .client()
        .get(&format!("/delete_submission/{}", entry.path))
        .await;

    assert_eq!(response.status_code(), 303);
    assert!(app.submissions().await.is_empty());
}

#[tokio::test]
async fn test_delete_outside_submissions_is_forbidden() {
    let app = setup_test_app().await;

    let response = app.client().get("/delete_submission/etc/passwd").await;

    assert_eq!(response.status_code(), 403);
    assert_eq!(response.text(), "Unauthorized action");
}

#[tokio::test]
async fn test_delete_request_logs_is_forbidden() {
    let app = setup_test_app().await;
    let dir = app.file("request_logs/2024/October");
    std::fs::create_dir_all(&dir).unwrap();
    let log = dir.join("log.json");
    std::fs::write(&log, "{}").unwrap();

    let response = app
        .client()
        .post("/delete_submission/request_logs/2024/October/log.json")
        .await;

    assert_eq!(response.status_code(), 403);
    assert!(log.exists());
}

#[tokio::test]
async fn test_delete_sibling_with_shared_prefix_is_forbidden() {
    let app = setup_test_app().await;
    let dir = app.file("submissions-evil");
    std::fs::create_dir_all(&dir).unwrap();
    let victim = dir.join("x");
    std::fs::write(&victim, "keep").unwrap();

    let response = app
        .client()
        .post("/delete_submission/submissions-evil/x")
        .await;

    assert_eq!(response.status_code(), 403);
    assert!(victim.exists());
}

#[tokio::test]
async fn test_delete_traversal_is_forbidden() {
    let app = setup_test_app().await;
    let outside = app.root().parent().unwrap().join("outside.txt");
    std::fs::write(&outside, "keep").unwrap();

    let response = app
        .client()
        .post("/delete_submission/submissions%2F..%2F..%2Foutside.txt")
        .await;

    assert_eq!(response.status_code(), 403);
    assert!(outside.exists());
}

#[tokio::test]
async fn test_delete_missing_file_is_server_error() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/delete_submission/submissions/2024/October/missing.json")
        .await;

    assert_eq!(response.status_code(), 500);
    assert!(response
        .text()
        .starts_with("An error occurred while deleting the file: "));
}
