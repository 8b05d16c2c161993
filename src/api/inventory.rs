//! Inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{
        enums::ItemStatus,
        inventory::{CreateInventoryItem, InventoryCounts, InventoryItem},
        Notification,
    },
};

use super::CurrentSession;

/// Inventory search parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct InventoryQuery {
    /// Case-insensitive term matched against name, type, location and serial number
    pub search: Option<String>,
}

/// Response wrapping a created item plus the notification to render
#[derive(Serialize, ToSchema)]
pub struct ItemResponse {
    pub item: InventoryItem,
    pub notification: Notification,
}

/// List one inventory bucket, optionally filtered
#[utoipa::path(
    get,
    path = "/inventory/{bucket}",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(
        ("bucket" = ItemStatus, Path, description = "Lifecycle bucket"),
        InventoryQuery
    ),
    responses(
        (status = 200, description = "Items in the bucket", body = Vec<InventoryItem>)
    )
)]
pub async fn list_inventory(
    State(state): State<crate::AppState>,
    CurrentSession(_session): CurrentSession,
    Path(bucket): Path<ItemStatus>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let term = query.search.unwrap_or_default();
    let items = state.services.inventory.search(bucket, &term).await;
    Ok(Json(items))
}

/// Per-bucket inventory totals
#[utoipa::path(
    get,
    path = "/inventory/counts",
    tag = "inventory",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bucket totals", body = InventoryCounts)
    )
)]
pub async fn inventory_counts(
    State(state): State<crate::AppState>,
    CurrentSession(_session): CurrentSession,
) -> AppResult<Json<InventoryCounts>> {
    Ok(Json(state.services.inventory.counts().await))
}

/// Equipment data entry
#[utoipa::path(
    post,
    path = "/inventory",
    tag = "inventory",
    security(("bearer_auth" = [])),
    request_body = CreateInventoryItem,
    responses(
        (status = 201, description = "Item added", body = ItemResponse),
        (status = 400, description = "Missing required fields"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Json(data): Json<CreateInventoryItem>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    session.require_admin()?;
    let (item, notification) = state.services.inventory.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ItemResponse { item, notification }),
    ))
}
