//! Payload Validation
//!
//! Outbound checks run before a request is built; inbound parsing turns
//! untyped JSON into models and rejects anything that does not fit.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult, UploadRejection};
use crate::models::{CreateItemDto, ImageFile, Item, ListEntry, Patch, UpdateItemDto};

/// Upload size limit: 5 MiB
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

// ========================
// Outbound
// ========================

pub fn validate_create(dto: &CreateItemDto) -> ApiResult<()> {
    if dto.name.is_empty() {
        return Err(ApiError::validation("name", "name is required"));
    }
    Ok(())
}

pub fn validate_update(dto: &UpdateItemDto) -> ApiResult<()> {
    if let Patch::Set(name) = &dto.name {
        if name.is_empty() {
            return Err(ApiError::validation("name", "name must not be empty"));
        }
    }
    if let Patch::Set(Some(image_url)) = &dto.image_url {
        url::Url::parse(image_url)
            .map_err(|e| ApiError::validation("imageUrl", format!("not a valid URL ({})", e)))?;
    }
    Ok(())
}

/// Name and size checks that only need file metadata
pub fn validate_image_meta(name: &str, size: u64) -> Result<(), UploadRejection> {
    if name.is_empty() {
        return Err(UploadRejection::EmptyName);
    }
    if !name.is_ascii() {
        return Err(UploadRejection::NonAsciiName(name.to_string()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadRejection::TooLarge { size, limit: MAX_IMAGE_BYTES });
    }
    Ok(())
}

pub fn validate_image(file: &ImageFile) -> Result<(), UploadRejection> {
    validate_image_meta(&file.name, file.size())
}

// ========================
// Inbound
// ========================

fn parse<T: DeserializeOwned>(entity: &'static str, value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| ApiError::schema(entity, e))
}

pub fn parse_item(value: Value) -> ApiResult<Item> {
    parse("item", value)
}

/// Parse a list response, naming the index of the first bad entry
pub fn parse_list(value: Value) -> ApiResult<Vec<ListEntry>> {
    let Value::Array(entries) = value else {
        return Err(ApiError::schema("item list", "expected an array"));
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry)
                .map_err(|e| ApiError::schema("item list", format!("entry {}: {}", index, e)))
        })
        .collect()
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// Extract the stored image URL from an upload response
pub fn parse_upload(value: Value) -> ApiResult<String> {
    parse::<UploadResponse>("upload", value).map(|response| response.url)
}
