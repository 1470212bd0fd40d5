//! Item Endpoints
//!
//! Data access for `/api/{tenant}/items` and image upload. Each call
//! validates its input, sends one request, and validates the response.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Method;

use super::http::{ApiRequest, HttpClient, MultipartFile};
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateItemDto, ImageFile, Item, ItemId, ListEntry, UpdateItemDto};
use crate::schema;

/// Characters escaped in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn tenant_path(tenant: &str) -> String {
    format!("/api/{}", utf8_percent_encode(tenant, PATH_SEGMENT))
}

fn to_json<T: serde::Serialize>(value: &T) -> ApiResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))
}

#[derive(Clone)]
pub struct ItemsApi {
    http: HttpClient,
}

impl ItemsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list_items(&self, tenant: &str, page: u32, page_size: u32) -> ApiResult<Vec<ListEntry>> {
        let path = format!("{}/items?page={}&pageSize={}", tenant_path(tenant), page, page_size);
        let body = self.http.request(ApiRequest::get(path)).await?;
        schema::parse_list(body.into_json("item list")?)
    }

    pub async fn get_item(&self, tenant: &str, id: ItemId) -> ApiResult<Item> {
        let path = format!("{}/items/{}", tenant_path(tenant), id);
        let body = self.http.request(ApiRequest::get(path)).await?;
        schema::parse_item(body.into_json("item")?)
    }

    pub async fn create_item(&self, tenant: &str, dto: &CreateItemDto) -> ApiResult<Item> {
        schema::validate_create(dto)?;
        let path = format!("{}/items", tenant_path(tenant));
        let request = ApiRequest::new(Method::POST, path).json(to_json(dto)?);
        let body = self.http.request(request).await?;
        let item = schema::parse_item(body.into_json("item")?)?;
        tracing::info!(tenant, id = item.id, "item created");
        Ok(item)
    }

    pub async fn update_item(&self, tenant: &str, id: ItemId, dto: &UpdateItemDto) -> ApiResult<Item> {
        schema::validate_update(dto)?;
        let path = format!("{}/items/{}", tenant_path(tenant), id);
        let request = ApiRequest::new(Method::PATCH, path).json(to_json(dto)?);
        let body = self.http.request(request).await?;
        let item = schema::parse_item(body.into_json("item")?)?;
        tracing::info!(tenant, id, "item updated");
        Ok(item)
    }

    pub async fn delete_item(&self, tenant: &str, id: ItemId) -> ApiResult<()> {
        let path = format!("{}/items/{}", tenant_path(tenant), id);
        self.http.request(ApiRequest::delete(path)).await?;
        tracing::info!(tenant, id, "item deleted");
        Ok(())
    }

    /// Upload an image and return its public URL.
    ///
    /// Name and size are checked locally first; a rejected file never
    /// reaches the network.
    pub async fn upload_image(&self, tenant: &str, file: &ImageFile) -> ApiResult<String> {
        schema::validate_image(file)?;
        let path = format!("{}/images/upload", tenant_path(tenant));
        let request = ApiRequest::new(Method::POST, path).multipart(MultipartFile {
            field: "image",
            file_name: file.name.clone(),
            bytes: file.bytes.clone(),
        });
        let body = self.http.request(request).await?;
        let url = schema::parse_upload(body.into_json("upload")?)?;
        tracing::info!(tenant, size = file.size(), "image uploaded");
        Ok(url)
    }
}
