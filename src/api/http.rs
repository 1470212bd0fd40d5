//! HTTP Contract
//!
//! Requests, raw responses, and the client that applies the shared
//! response rules (content-type based decoding, non-2xx → `ApiError::Http`).

use std::rc::Rc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartFile {
    pub field: &'static str,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartFile),
}

/// Request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: RequestBody::Empty }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, file: MultipartFile) -> Self {
        self.body = RequestBody::Multipart(file);
        self
    }
}

/// Response as received, before any interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn into_json(self, entity: &'static str) -> ApiResult<Value> {
        match self {
            ResponseBody::Json(value) => Ok(value),
            ResponseBody::Text(_) => Err(ApiError::schema(entity, "expected a JSON body")),
        }
    }

    /// Body as error text; JSON is re-serialized
    pub fn into_message(self) -> String {
        match self {
            ResponseBody::Json(Value::String(s)) => s,
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text,
        }
    }
}

/// Network layer. Implementations send exactly one request and never
/// interpret the status code.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, url: &str, request: &ApiRequest) -> ApiResult<RawResponse>;
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    transport: Rc<dyn Transport>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn Transport>) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn request(&self, request: ApiRequest) -> ApiResult<ResponseBody> {
        let url = self.url(&request.path);
        tracing::debug!(method = %request.method, url = %url, "request");

        let raw = self.transport.send(&url, &request).await.inspect_err(|e| {
            tracing::warn!(method = %request.method, url = %url, error = %e, "request failed");
        })?;
        let success = raw.is_success();
        let status = raw.status;
        let status_text = raw.status_text.clone();
        let body = decode_body(raw, success)?;

        if !success {
            tracing::warn!(method = %request.method, url = %url, status, "non-success response");
            return Err(ApiError::Http { status, status_text, message: body.into_message() });
        }
        Ok(body)
    }
}

fn decode_body(raw: RawResponse, success: bool) -> ApiResult<ResponseBody> {
    if raw.body.is_empty() {
        return Ok(ResponseBody::Text(String::new()));
    }
    if raw.is_json() {
        match serde_json::from_slice(&raw.body) {
            Ok(value) => return Ok(ResponseBody::Json(value)),
            // Error bodies still surface their text; success bodies must parse
            Err(e) if success => return Err(ApiError::schema("response", e)),
            Err(_) => {}
        }
    }
    Ok(ResponseBody::Text(String::from_utf8_lossy(&raw.body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{json_response, text_response, CannedTransport};
    use serde_json::json;

    fn client(response: RawResponse) -> (HttpClient, Rc<CannedTransport>) {
        let transport = Rc::new(CannedTransport::new(response));
        (HttpClient::new("http://api.test", transport.clone()), transport)
    }

    #[tokio::test]
    async fn test_json_body_parsed() {
        let (http, transport) = client(json_response(200, json!({ "ok": true })));
        let body = http.request(ApiRequest::get("/api/demo/items")).await.unwrap();
        assert_eq!(body, ResponseBody::Json(json!({ "ok": true })));
        assert_eq!(transport.urls(), vec!["http://api.test/api/demo/items".to_string()]);
    }

    #[tokio::test]
    async fn test_text_body_when_not_json() {
        let (http, _) = client(text_response(200, "pong"));
        let body = http.request(ApiRequest::get("/ping")).await.unwrap();
        assert_eq!(body, ResponseBody::Text("pong".into()));
    }

    #[tokio::test]
    async fn test_error_carries_status_and_json_body() {
        let (http, _) = client(json_response(404, json!({ "message": "Item not found" })));
        let err = http.request(ApiRequest::get("/api/demo/items/9")).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 404,
                status_text: "Not Found".into(),
                message: r#"{"message":"Item not found"}"#.into(),
            }
        );
    }

    #[tokio::test]
    async fn test_error_with_text_body() {
        let (http, _) = client(text_response(500, "boom"));
        let err = http.request(ApiRequest::get("/x")).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error boom");
    }

    #[tokio::test]
    async fn test_malformed_json_on_success_is_schema_error() {
        let mut response = json_response(200, json!(null));
        response.body = b"{not json".to_vec();
        let (http, _) = client(response);
        let err = http.request(ApiRequest::get("/x")).await.unwrap_err();
        assert!(matches!(err, ApiError::Schema { entity: "response", .. }));
    }

    #[tokio::test]
    async fn test_empty_body_is_empty_text() {
        let (http, _) = client(RawResponse {
            status: 204,
            status_text: "No Content".into(),
            content_type: None,
            body: Vec::new(),
        });
        let body = http.request(ApiRequest::delete("/api/demo/items/1")).await.unwrap();
        assert_eq!(body, ResponseBody::Text(String::new()));
    }
}
