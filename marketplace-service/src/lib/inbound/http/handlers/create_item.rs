use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::UserId;
use crate::domain::item::models::Item;
use crate::domain::item::models::NewItem;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    let Json(body) =
        body.map_err(|_| ApiError::BadRequest("invalid request format".to_string()))?;

    let new_item = NewItem::new(
        user.user_id,
        &user.login,
        &body.title,
        &body.description,
        body.price,
        body.image_url.as_deref().unwrap_or_default(),
    )?;

    state
        .items_service
        .create_item(new_item)
        .await
        .map_err(ApiError::from)
        .map(|item| {
            ApiSuccess::new(StatusCode::OK, ItemData::from_item(&item, Some(user.user_id)))
        })
}

/// HTTP request body for publishing a listing (raw JSON). Absent text
/// fields deserialize empty, an absent price as zero; both fail
/// validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemData {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub author_id: i64,
    pub author_login: String,
    pub created_at: DateTime<Utc>,
    pub is_mine: bool,
}

impl ItemData {
    pub fn from_item(item: &Item, viewer: Option<UserId>) -> Self {
        Self {
            id: item.id.0,
            title: item.title.clone(),
            description: item.description.clone(),
            image_url: item.image_url.clone(),
            price: item.price,
            author_id: item.author_id.0,
            author_login: item.author_login.clone(),
            created_at: item.created_at,
            is_mine: viewer == Some(item.author_id),
        }
    }
}
