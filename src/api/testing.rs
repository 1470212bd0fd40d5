//! Test Transports
//!
//! `FakeBackend` implements the REST contract in memory; `CannedTransport`
//! always returns the same response. Both record every request.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use reqwest::StatusCode;
use serde_json::{json, Value};

use super::http::{ApiRequest, HttpClient, RawResponse, RequestBody, Transport};
use super::items::ItemsApi;
use crate::error::ApiResult;
use crate::models::{Item, ItemId, ListEntry, Patch, UpdateItemDto};

pub const BASE_URL: &str = "http://api.test";

fn reason(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or_default()
        .to_string()
}

pub fn json_response(status: u16, body: Value) -> RawResponse {
    RawResponse {
        status,
        status_text: reason(status),
        content_type: Some("application/json; charset=utf-8".into()),
        body: body.to_string().into_bytes(),
    }
}

pub fn text_response(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status,
        status_text: reason(status),
        content_type: Some("text/plain".into()),
        body: body.as_bytes().to_vec(),
    }
}

fn empty_response(status: u16) -> RawResponse {
    RawResponse { status, status_text: reason(status), content_type: None, body: Vec::new() }
}

fn not_found() -> RawResponse {
    json_response(404, json!({ "message": "Item not found" }))
}

// ========================
// CannedTransport
// ========================

pub struct CannedTransport {
    response: RawResponse,
    urls: RefCell<Vec<String>>,
}

impl CannedTransport {
    pub fn new(response: RawResponse) -> Self {
        Self { response, urls: RefCell::new(Vec::new()) }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for CannedTransport {
    async fn send(&self, url: &str, _request: &ApiRequest) -> ApiResult<RawResponse> {
        self.urls.borrow_mut().push(url.to_string());
        Ok(self.response.clone())
    }
}

// ========================
// FakeBackend
// ========================

#[derive(Default)]
struct State {
    items: Vec<Item>,
    next_id: ItemId,
    requests: Vec<(String, String)>,
    canned: Option<RawResponse>,
}

#[derive(Default)]
pub struct FakeBackend {
    state: RefCell<State>,
}

/// Apply a partial update the way the server does
pub fn apply_patch(item: &mut Item, dto: &UpdateItemDto) {
    if let Patch::Set(name) = &dto.name {
        item.name = name.clone();
    }
    if let Patch::Set(memo) = &dto.memo {
        item.memo = memo.clone();
    }
    if let Patch::Set(image_url) = &dto.image_url {
        item.image_url = image_url.clone();
    }
    if let Patch::Set(is_completed) = dto.is_completed {
        item.is_completed = is_completed;
    }
}

impl FakeBackend {
    /// Fresh backend plus an `ItemsApi` wired to it
    pub fn api() -> (ItemsApi, Rc<FakeBackend>) {
        let backend = Rc::new(FakeBackend::default());
        let http = HttpClient::new(BASE_URL, backend.clone());
        (ItemsApi::new(http), backend)
    }

    /// Answer the next request with `response` instead of routing it
    pub fn respond_next(&self, response: RawResponse) {
        self.state.borrow_mut().canned = Some(response);
    }

    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    /// `(method, url)` pairs in arrival order
    pub fn requests(&self) -> Vec<(String, String)> {
        self.state.borrow().requests.clone()
    }

    fn route(&self, url: &str, request: &ApiRequest) -> RawResponse {
        let path = url.strip_prefix(BASE_URL).unwrap_or(url);
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<String> = path
            .trim_start_matches('/')
            .split('/')
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        let mut state = self.state.borrow_mut();
        match (request.method.as_str(), segments.as_slice()) {
            ("GET", ["api", tenant, "items"]) => {
                let entries: Vec<ListEntry> = state
                    .items
                    .iter()
                    .filter(|item| item.tenant_id == *tenant)
                    .map(ListEntry::from)
                    .collect();
                json_response(200, json!(entries))
            }
            ("POST", ["api", tenant, "items"]) => {
                let RequestBody::Json(body) = &request.body else {
                    return json_response(400, json!({ "message": "expected JSON" }));
                };
                let Some(name) = body.get("name").and_then(Value::as_str) else {
                    return json_response(400, json!({ "message": "name is required" }));
                };
                state.next_id += 1;
                let item = Item {
                    id: state.next_id,
                    tenant_id: tenant.to_string(),
                    name: name.to_string(),
                    memo: None,
                    image_url: None,
                    is_completed: false,
                };
                state.items.push(item.clone());
                json_response(201, json!(item))
            }
            (method, ["api", tenant, "items", id]) => {
                let Ok(id) = id.parse::<ItemId>() else {
                    return not_found();
                };
                let Some(index) = state
                    .items
                    .iter()
                    .position(|item| item.id == id && item.tenant_id == *tenant)
                else {
                    return not_found();
                };
                match method {
                    "GET" => json_response(200, json!(state.items[index])),
                    "PATCH" => {
                        let RequestBody::Json(body) = &request.body else {
                            return json_response(400, json!({ "message": "expected JSON" }));
                        };
                        let Ok(dto) = serde_json::from_value::<UpdateItemDto>(body.clone()) else {
                            return json_response(400, json!({ "message": "bad patch" }));
                        };
                        apply_patch(&mut state.items[index], &dto);
                        json_response(200, json!(state.items[index]))
                    }
                    "DELETE" => {
                        state.items.remove(index);
                        empty_response(204)
                    }
                    _ => json_response(405, json!({ "message": "method not allowed" })),
                }
            }
            ("POST", ["api", tenant, "images", "upload"]) => match &request.body {
                RequestBody::Multipart(file) if file.field == "image" => json_response(
                    200,
                    json!({ "url": format!("https://cdn.test/{}/{}", tenant, file.file_name) }),
                ),
                _ => json_response(400, json!({ "message": "missing image field" })),
            },
            _ => not_found(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, url: &str, request: &ApiRequest) -> ApiResult<RawResponse> {
        let canned = {
            let mut state = self.state.borrow_mut();
            state.requests.push((request.method.to_string(), url.to_string()));
            state.canned.take()
        };
        Ok(canned.unwrap_or_else(|| self.route(url, request)))
    }
}
