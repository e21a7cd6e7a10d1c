use posts_pipeline::http::{self, AppState, TRACE_ID_HEADER};
use posts_pipeline::problem::Environment;
use serde_json::Value;

pub const FILTER: &str = "/filter-posts/";
pub const PIPELINE: &str = "/pipeline-behavior-posts/";

pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn list(&self, path: &str) -> Vec<Value> {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}

/// Bind to port 0 and return the actual address.
pub async fn start_server(environment: Environment) -> TestServer {
    let app = http::router(AppState::standard(environment));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
    }
}

pub async fn start() -> TestServer {
    start_server(Environment::Production).await
}

/// Sorted field names of a problem body's `errors` member.
pub fn error_fields(problem: &Value) -> Vec<String> {
    let mut fields: Vec<String> = problem["errors"]
        .as_object()
        .expect("problem has no errors member")
        .keys()
        .cloned()
        .collect();
    fields.sort();
    fields
}

pub fn trace_header(resp: &reqwest::Response) -> String {
    resp.headers()
        .get(TRACE_ID_HEADER.as_str())
        .expect("missing trace id header")
        .to_str()
        .unwrap()
        .to_string()
}

pub fn content_type(resp: &reqwest::Response) -> String {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string())
        .unwrap_or_default()
}
