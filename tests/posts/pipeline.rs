//! `/pipeline-behavior-posts/`: validation as a mediator pipeline stage.

use posts_pipeline::problem::Environment;
use serde_json::{json, Value};

use crate::support::{
    content_type, error_fields, start, start_server, trace_header, FILTER, PIPELINE,
};

#[tokio::test]
async fn create_returns_full_post() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(PIPELINE))
        .json(&json!({ "title": "  Hello ", "content": "World" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let post: Value = resp.json().await.unwrap();
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["content"], "World");
    assert!(post["id"].is_string());

    let posts = server.list(PIPELINE).await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1], post);
}

#[tokio::test]
async fn groups_share_one_store() {
    let server = start().await;

    server
        .client
        .post(server.url(PIPELINE))
        .json(&json!({ "title": "Shared", "content": "Store" }))
        .send()
        .await
        .unwrap();

    assert_eq!(server.list(FILTER).await.len(), 2);
}

#[tokio::test]
async fn empty_fields_raise_validation_problem() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(PIPELINE))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(content_type(&resp), "application/problem+json");
    let trace_id = trace_header(&resp);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(problem["type"], "https://tools.ietf.org/html/rfc9110#section-15.5.1");
    assert_eq!(problem["title"], "Validation Error");
    assert_eq!(problem["detail"], "One or more validation errors occurred.");
    assert_eq!(problem["instance"], PIPELINE);
    assert_eq!(problem["traceId"], trace_id.as_str());
    assert_eq!(error_fields(&problem), vec!["content", "title"]);
    assert!(problem.get("errorType").is_none());

    assert_eq!(server.list(PIPELINE).await.len(), 1);
}

#[tokio::test]
async fn null_field_is_reported_as_required() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(PIPELINE))
        .json(&json!({ "title": null, "content": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(problem["title"], "Validation Error");
    assert_eq!(error_fields(&problem), vec!["content", "title"]);
    assert_eq!(problem["errors"]["title"], json!(["'title' is required."]));
    assert_eq!(server.list(PIPELINE).await.len(), 1);
}

#[tokio::test]
async fn single_empty_field() {
    let server = start().await;

    let resp = server
        .client
        .post(server.url(PIPELINE))
        .json(&json!({ "title": "t", "content": "" }))
        .send()
        .await
        .unwrap();
    let problem: Value = resp.json().await.unwrap();
    assert_eq!(error_fields(&problem), vec!["content"]);
    assert_eq!(problem["errors"]["content"], json!(["'content' is required."]));
}

#[tokio::test]
async fn update_returns_revised_post() {
    let server = start().await;
    let id = server.list(PIPELINE).await[0]["id"].as_str().unwrap().to_string();

    let resp = server
        .client
        .put(server.url(PIPELINE))
        .json(&json!({ "id": id, "title": "Edited", "content": "Again" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let post: Value = resp.json().await.unwrap();
    assert_eq!(post, json!({ "id": id, "title": "Edited", "content": "Again" }));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let server = start().await;

    let resp = server
        .client
        .put(server.url("/pipeline-behavior-posts"))
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
    assert_eq!(problem["instance"], "/pipeline-behavior-posts");
}

#[tokio::test]
async fn update_nil_id_is_invalid() {
    let server = start().await;

    let resp = server
        .client
        .put(server.url(PIPELINE))
        .json(&json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "title": "t",
            "content": "c",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(error_fields(&problem), vec!["id"]);
}

#[tokio::test]
async fn bad_argument_detail_hidden_in_production() {
    let server = start().await;

    let resp = server
        .client
        .put(server.url(PIPELINE))
        .json(&json!({ "id": "not-a-uuid", "title": "t", "content": "c" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let problem: Value = resp.json().await.unwrap();
    assert_eq!(problem["title"], "Invalid Argument");
    assert_eq!(problem["detail"], "The request contained an invalid argument.");
}

#[tokio::test]
async fn development_exposes_error_type() {
    let server = start_server(Environment::Development).await;

    let resp = server
        .client
        .put(server.url(PIPELINE))
        .json(&json!({ "id": "not-a-uuid", "title": "t", "content": "c" }))
        .send()
        .await
        .unwrap();
    let problem: Value = resp.json().await.unwrap();
    assert_eq!(problem["errorType"], "HandlerError::BadArgument");
    assert_ne!(problem["detail"], "The request contained an invalid argument.");
}
