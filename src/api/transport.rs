//! Reqwest Transport
//!
//! Browser fetch via reqwest's wasm32 backend.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::multipart::{Form, Part};

use super::http::{ApiRequest, RawResponse, RequestBody, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> ApiResult<RawResponse> {
        // The query cache is the only cache; ask every layer below not to store.
        let builder = self
            .client
            .request(request.method.clone(), url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache");

        let builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(file) => {
                let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            content_type,
            body: body.to_vec(),
        })
    }
}
