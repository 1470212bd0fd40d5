//! Item Queries
//!
//! Cache keys and hooks for items. Mutations never patch cached data;
//! they invalidate (and for delete, evict) so views refetch server truth.

use leptos::prelude::*;
use leptos_query_cache::{
    query_key, use_mutation, use_query, use_stateless_mutation, Mutation, Query, QueryClient,
    QueryKey, QueryOptions,
};

use crate::context::use_app_context;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateItemDto, ImageFile, Item, ItemId, ListEntry, UpdateItemDto};

/// Placeholder detail segment used while no item is selected
pub const NO_ITEM: &str = "nil";

pub struct ItemKeys;

impl ItemKeys {
    pub fn root(tenant: &str) -> QueryKey {
        query_key!["items", tenant]
    }

    pub fn list(tenant: &str, page: u32, page_size: u32) -> QueryKey {
        Self::root(tenant).with("list").with(page).with(page_size)
    }

    pub fn detail(tenant: &str, id: Option<ItemId>) -> QueryKey {
        let key = Self::root(tenant).with("detail");
        match id {
            Some(id) => key.with(id),
            None => key.with(NO_ITEM),
        }
    }
}

// ========================
// Invalidation rules
// ========================

pub fn after_create(client: &QueryClient, tenant: &str) {
    client.invalidate_queries(&ItemKeys::root(tenant));
}

pub fn after_update(client: &QueryClient, tenant: &str, id: ItemId) {
    client.invalidate_queries(&ItemKeys::root(tenant));
    client.invalidate_queries(&ItemKeys::detail(tenant, Some(id)));
}

pub fn after_delete(client: &QueryClient, tenant: &str, id: ItemId) {
    client.invalidate_queries(&ItemKeys::root(tenant));
    client.remove_queries(&ItemKeys::detail(tenant, Some(id)));
}

// ========================
// Hooks
// ========================

pub fn use_items(page: u32, page_size: u32) -> Query<Vec<ListEntry>, ApiError> {
    let ctx = use_app_context();
    let tenant = ctx.tenant();
    let key = ItemKeys::list(&tenant, page, page_size);
    use_query(
        ctx.queries,
        move || QueryOptions::new(key.clone()),
        move || {
            let api = ctx.api();
            let tenant = tenant.clone();
            async move { api.list_items(&tenant, page, page_size).await }
        },
    )
}

/// Detail query; idle while `id` is `None`
pub fn use_item(id: Signal<Option<ItemId>>) -> Query<Item, ApiError> {
    let ctx = use_app_context();
    let tenant = ctx.tenant();
    let key_tenant = tenant.clone();
    use_query(
        ctx.queries,
        move || {
            let id = id.get();
            QueryOptions::new(ItemKeys::detail(&key_tenant, id)).enabled(id.is_some())
        },
        move || {
            let api = ctx.api();
            let tenant = tenant.clone();
            let id = id.get_untracked();
            async move {
                match id {
                    Some(id) => api.get_item(&tenant, id).await,
                    None => Err(ApiError::validation("id", "no item selected")),
                }
            }
        },
    )
}

pub fn use_create_item() -> Mutation<CreateItemDto, ApiResult<Item>> {
    let ctx = use_app_context();
    let tenant = ctx.tenant();
    let key_tenant = tenant.clone();
    use_mutation(
        ctx.queries,
        move |dto: CreateItemDto| {
            let api = ctx.api();
            let tenant = tenant.clone();
            async move { api.create_item(&tenant, &dto).await }
        },
        move |client, _dto, _item| after_create(client, &key_tenant),
    )
}

/// Input for [`use_update_item`]
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItem {
    pub id: ItemId,
    pub dto: UpdateItemDto,
}

pub fn use_update_item() -> Mutation<UpdateItem, ApiResult<Item>> {
    let ctx = use_app_context();
    let tenant = ctx.tenant();
    let key_tenant = tenant.clone();
    use_mutation(
        ctx.queries,
        move |input: UpdateItem| {
            let api = ctx.api();
            let tenant = tenant.clone();
            async move { api.update_item(&tenant, input.id, &input.dto).await }
        },
        move |client, input, _item| after_update(client, &key_tenant, input.id),
    )
}

pub fn use_delete_item() -> Mutation<ItemId, ApiResult<()>> {
    let ctx = use_app_context();
    let tenant = ctx.tenant();
    let key_tenant = tenant.clone();
    use_mutation(
        ctx.queries,
        move |id: ItemId| {
            let api = ctx.api();
            let tenant = tenant.clone();
            async move { api.delete_item(&tenant, id).await }
        },
        move |client, id, _| after_delete(client, &key_tenant, *id),
    )
}

/// Upload with no cache key; each call stands alone
pub fn use_upload_image() -> Mutation<ImageFile, ApiResult<String>> {
    let ctx = use_app_context();
    let tenant = ctx.tenant();
    use_stateless_mutation(move |file: ImageFile| {
        let api = ctx.api();
        let tenant = tenant.clone();
        async move { api.upload_image(&tenant, &file).await }
    })
}
