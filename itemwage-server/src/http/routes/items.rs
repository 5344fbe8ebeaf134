//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Item, ItemRepo};
use crate::db::DbSession;
use crate::http::error::ApiError;
use crate::http::extractors::{ItemId, JsonBody};
use crate::http::server::AppState;
use crate::models::{ItemPatch, NewItem};

/// Item response
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

/// POST /items - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let new_item = NewItem::from_json(body)?;
    let mut session = DbSession::acquire(&state).await?;
    let item = ItemRepo::new(&mut session).create(&new_item).await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// GET /items/{item_id} - get a single item
async fn get_item(
    ItemId(id): ItemId,
    mut session: DbSession,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = ItemRepo::new(&mut session).get(id).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// PUT /items/{item_id} - overwrite the supplied fields
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(body): JsonBody,
) -> Result<Json<ItemResponse>, ApiError> {
    let patch = ItemPatch::from_json(body)?;
    let mut session = DbSession::acquire(&state).await?;
    let item = ItemRepo::new(&mut session).update(id, &patch).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/{item_id} - delete and return the removed item
async fn delete_item(
    ItemId(id): ItemId,
    mut session: DbSession,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = ItemRepo::new(&mut session).delete(id).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", post(create_item))
        .route(
            "/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
