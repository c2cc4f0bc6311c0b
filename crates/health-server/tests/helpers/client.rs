//! In-process test client driving the router through `tower::ServiceExt`.

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Sends requests straight into a `Router` without opening a socket.
pub struct TestClient {
    app: Router,
}

impl TestClient {
    /// Wraps `app`; each request runs against a fresh clone.
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    /// `GET uri` with no headers and an empty body.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, Vec::new(), Body::empty()).await
    }

    /// `GET uri` with extra `(name, value)` headers.
    pub async fn get_with_headers(&self, uri: &str, headers: Vec<(&str, &str)>) -> TestResponse {
        self.send(Method::GET, uri, headers, Body::empty()).await
    }

    /// GET with a body, which the health endpoint must ignore.
    pub async fn get_with_body(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Method::GET,
            uri,
            vec![("content-type", "application/json")],
            Body::from(body.to_string()),
        )
        .await
    }

    /// Empty-bodied request with an arbitrary method.
    pub async fn method(&self, method: Method, uri: &str) -> TestResponse {
        self.send(method, uri, Vec::new(), Body::empty()).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        headers: Vec<(&str, &str)>,
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .expect("Request failed");

        TestResponse::from_response(response).await
    }
}

/// Fully buffered response with chainable assertions.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    async fn from_response(response: Response<Body>) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();

        Self {
            status,
            headers,
            body,
        }
    }

    /// Body as UTF-8; panics otherwise.
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Body is not valid UTF-8")
    }

    /// Body parsed as JSON into `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON")
    }

    /// Header value as a string, if present and visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Panics with the body in the message when the status differs.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {} but got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
        self
    }

    /// Substring match so `application/json; charset=utf-8` still passes.
    pub fn assert_content_type_contains(&self, expected: &str) -> &Self {
        let content_type = self
            .header("content-type")
            .expect("Response missing Content-Type header");

        assert!(
            content_type.contains(expected),
            "Expected Content-Type to contain '{}' but got '{}'",
            expected,
            content_type
        );
        self
    }

    /// Asserts `name` is present, whatever its value.
    pub fn assert_header_exists(&self, name: &str) -> &Self {
        assert!(
            self.headers.contains_key(name),
            "Expected header '{}' to exist",
            name
        );
        self
    }

    /// Asserts `name` is present with exactly `expected`.
    pub fn assert_header(&self, name: &str, expected: &str) -> &Self {
        let value = self
            .header(name)
            .unwrap_or_else(|| panic!("Header '{}' not found", name));

        assert_eq!(
            value, expected,
            "Expected header '{}' to be '{}' but got '{}'",
            name, expected, value
        );
        self
    }
}

/// Client over the default router.
pub fn client() -> TestClient {
    TestClient::new(health_server::create_router())
}
