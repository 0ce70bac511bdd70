//! HTTP API tests against the Axum router

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use doc_search::api::{create_router, AppState};
use doc_search::store::DocumentStore;

fn app() -> Router {
    let store = Arc::new(DocumentStore::with_sample_documents());
    create_router(Arc::new(AppState::new(store)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_documents() {
    let (status, body) = send(app(), get("/api/documents")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = send(app(), get("/api/documents?type=docx")).await;
    let docs = body.as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["name"], "Project Proposal.docx");
}

#[tokio::test]
async fn test_get_document() {
    let (status, body) = send(app(), get("/api/documents/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["type"], "pdf");

    let (status, body) = send(app(), get("/api/documents/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, body) = send(app(), get("/api/documents/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_document() {
    let app = app();
    let payload = json!({
        "name": "CO full notes.pdf",
        "size": 250000,
        "content": "This chapter introduces register transfer language concepts."
    });

    let (status, body) = send(app.clone(), json_request("POST", "/api/documents", payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 4);
    assert_eq!(body["type"], "pdf");

    let (status, _) = send(app, get("/api/documents/4")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_document_invalid() {
    let (status, body) = send(
        app(),
        json_request("POST", "/api/documents", json!({ "name": "", "type": "pdf", "size": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = send(
        app(),
        json_request("POST", "/api/documents", json!({ "name": "a.pdf", "type": "exe", "size": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        app(),
        json_request("POST", "/api/documents", json!({ "name": "a.pdf" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_document() {
    let app = app();
    let (status, body) = send(
        app.clone(),
        json_request("PATCH", "/api/documents/2", json!({ "content": "fresh market data" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "fresh market data");
    assert_eq!(body["name"], "Project Proposal.docx");

    let (status, _) = send(
        app,
        json_request("PATCH", "/api/documents/42", json!({ "size": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_document() {
    let app = app();
    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/api/documents/3")
            .body(Body::empty())
            .unwrap()
    };

    let (status, body) = send(app.clone(), delete()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(app.clone(), delete()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(app, get("/api/documents")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search() {
    let (status, body) = send(app(), get("/api/search?q=financial")).await;
    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 3);
    for result in results {
        let relevance = result["relevance"].as_u64().unwrap();
        assert!((1..=100).contains(&relevance));
        assert!(result["matchedText"].as_str().unwrap().ends_with("..."));
    }

    let (_, body) = send(app(), get("/api/search?q=financial&semantic=false")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_with_type_filter() {
    let (_, body) = send(app(), get("/api/search?q=financial&type=pptx")).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["type"], "pptx");

    let (status, body) = send(app(), get("/api/search?q=financial&type=xlsx")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_empty_query() {
    let (status, body) = send(app(), get("/api/search?q=%20%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Search query cannot be empty");

    let (status, _) = send(app(), get("/api/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_summary() {
    let (status, body) = send(app(), get("/api/documents/1/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Q1 Financial Report 2023.pdf");
    assert_eq!(body["fileType"], "PDF");
    assert_eq!(body["fileSize"], "2.4 MB");
    assert_eq!(body["focus"], "key-points");
    assert_eq!(body["points"].as_array().unwrap().len(), 4);

    let (_, body) = send(app(), get("/api/documents/1/summary?length=1&focus=concepts")).await;
    assert_eq!(body["points"].as_array().unwrap().len(), 2);
    assert_eq!(body["points"][0], "Revenue Growth");

    let (status, _) = send(app(), get("/api/documents/9/summary")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_summary_length_out_of_range_is_clamped() {
    let (status, body) = send(app(), get("/api/documents/1/summary?length=300")).await;
    assert_eq!(status, StatusCode::OK);
    // clamped to 5, so six points requested; the finance template has four
    assert_eq!(body["points"].as_array().unwrap().len(), 4);

    let (status, body) = send(app(), get("/api/documents/1/summary?length=-5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_summary_invalid_options() {
    let (status, body) = send(app(), get("/api/documents/1/summary?focus=bogus")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = send(app(), get("/api/documents/1/summary?length=long")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
