//! `/filter-posts/`: validation as a per-route filter.

use serde_json::{json, Value};

use crate::support::{content_type, error_fields, start, trace_header, FILTER};

#[tokio::test]
async fn list_returns_seed_post() {
    let server = start().await;
    let posts = server.list(FILTER).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Welcome");
    assert_eq!(posts[0]["content"], "This is the first post.");
}

#[tokio::test]
async fn path_without_trailing_slash_is_routed() {
    let server = start().await;
    let posts = server.list("/filter-posts").await;
    assert_eq!(posts.len(), 1);
}

#[tokio::test]
async fn create_returns_id_and_grows_list() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(FILTER))
        .json(&json!({ "title": "Hello", "content": "World" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body.as_object().unwrap().len(), 1);

    let posts = server.list(FILTER).await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1]["id"], id.as_str());
    assert_eq!(posts[1]["title"], "Hello");
}

#[tokio::test]
async fn identical_creates_get_distinct_ids() {
    let server = start().await;
    let mut ids = Vec::new();
    for _ in 0..2 {
        let body: Value = server
            .client
            .post(server.url(FILTER))
            .json(&json!({ "title": "Same", "content": "Same" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        ids.push(body["id"].as_str().unwrap().to_string());
    }
    assert_ne!(ids[0], ids[1]);
    assert_eq!(server.list(FILTER).await.len(), 3);
}

#[tokio::test]
async fn empty_fields_are_all_reported() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(FILTER))
        .json(&json!({ "title": "", "content": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(content_type(&resp), "application/problem+json");
    let trace_id = trace_header(&resp);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(problem["title"], "One or more validation errors occurred.");
    assert_eq!(problem["status"], 400);
    assert_eq!(problem["traceId"], trace_id.as_str());
    assert_eq!(error_fields(&problem), vec!["content", "title"]);
    assert_eq!(problem["errors"]["title"], json!(["'title' is required."]));
    assert_eq!(problem["instance"], FILTER);

    assert_eq!(server.list(FILTER).await.len(), 1);
}

#[tokio::test]
async fn null_field_is_reported_as_required() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(FILTER))
        .json(&json!({ "title": null, "content": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(problem["title"], "One or more validation errors occurred.");
    assert_eq!(error_fields(&problem), vec!["content", "title"]);
    assert_eq!(problem["errors"]["title"], json!(["'title' is required."]));
    assert_eq!(server.list(FILTER).await.len(), 1);
}

#[tokio::test]
async fn missing_field_reported_alone() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(FILTER))
        .json(&json!({ "title": "Only a title" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(error_fields(&problem), vec!["content"]);
}

#[tokio::test]
async fn update_existing_post() {
    let server = start().await;
    let id = server.list(FILTER).await[0]["id"].as_str().unwrap().to_string();

    let resp = server
        .client
        .put(server.url(FILTER))
        .json(&json!({ "id": id, "title": "Edited", "content": "New body" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.bytes().await.unwrap().is_empty());

    let posts = server.list(FILTER).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Edited");
    assert_eq!(posts[0]["content"], "New body");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let server = start().await;

    let resp = server
        .client
        .put(server.url(FILTER))
        .json(&json!({
            "id": "8b0f5c1e-1f7e-4d6a-9d1c-3b6c1f0e2a11",
            "title": "t",
            "content": "c",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(problem["title"], "Resource Not Found");
    assert_eq!(
        problem["detail"],
        "Post with id '8b0f5c1e-1f7e-4d6a-9d1c-3b6c1f0e2a11' was not found."
    );
}

#[tokio::test]
async fn update_without_id_is_invalid() {
    let server = start().await;

    let resp = server
        .client
        .put(server.url(FILTER))
        .json(&json!({ "title": "t", "content": "c" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(error_fields(&problem), vec!["id"]);
    assert_eq!(problem["errors"]["id"], json!(["'id' must not be empty."]));
}

#[tokio::test]
async fn update_unknown_id_with_bad_fields_is_invalid() {
    let server = start().await;

    let resp = server
        .client
        .put(server.url(FILTER))
        .json(&json!({
            "id": "8b0f5c1e-1f7e-4d6a-9d1c-3b6c1f0e2a11",
            "title": "",
            "content": "c",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn malformed_body_is_bad_argument() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(FILTER))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(problem["title"], "Invalid Argument");
    assert_eq!(server.list(FILTER).await.len(), 1);
}
