use super::*;

use std::fs;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

fn asset_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<!doctype html><title>index</title>").unwrap();
    fs::write(dir.path().join("model.glb"), b"glTF").unwrap();
    fs::write(dir.path().join("Grundriss Kellergeschoss_3.pdf"), b"%PDF-1.4").unwrap();
    dir
}

async fn get_path(dir: &tempfile::TempDir, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app(dir.path())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let dir = asset_dir();
    let (status, _, body) = get_path(&dir, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn serves_model_file() {
    let dir = asset_dir();
    let (status, _, body) = get_path(&dir, "/model.glb").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"glTF");
}

#[tokio::test]
async fn serves_pdf_with_encoded_space() {
    let dir = asset_dir();
    let (status, content_type, body) = get_path(&dir, "/Grundriss%20Kellergeschoss_3.pdf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/pdf"));
    assert_eq!(body, b"%PDF-1.4");
}

#[tokio::test]
async fn root_serves_index() {
    let dir = asset_dir();
    let (status, _, body) = get_path(&dir, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("<title>index</title>"));
}

#[tokio::test]
async fn unknown_path_falls_back_to_index() {
    let dir = asset_dir();
    let (status, _, body) = get_path(&dir, "/viewer/deep/link").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("<title>index</title>"));
}

#[tokio::test]
async fn missing_asset_dir_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, _) = get_path(&dir, "/model.glb").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
