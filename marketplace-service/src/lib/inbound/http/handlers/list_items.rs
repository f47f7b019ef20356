use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::{self};
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::UserId;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemFilters;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<ApiSuccess<Vec<ItemData>>, ApiError> {
    let Query(query) =
        query.map_err(|_| ApiError::BadRequest("invalid request format".to_string()))?;

    // A listing request is public; a bearer token only personalizes
    // the is_mine flag, so an invalid one is ignored rather than
    // rejected
    let viewer = bearer_token(&headers)
        .and_then(|token| state.auth_service.parse_token(token).ok())
        .map(|claims| UserId(claims.user_id));

    let filters = ItemFilters {
        title: query.title,
        description: query.description,
        min_price: query.min_price,
        max_price: query.max_price,
    };

    state
        .items_service
        .list_items(query.page.unwrap_or(0), query.limit.unwrap_or(0), filters)
        .await
        .map_err(ApiError::from)
        .map(|items| {
            let items = items
                .iter()
                .map(|item| ItemData::from_item(item, viewer))
                .collect();
            ApiSuccess::new(StatusCode::OK, items)
        })
}

/// Query string accepted by the listing endpoint. Everything is
/// optional; out-of-range numbers are clamped downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListItemsQuery {
    page: Option<i64>,
    limit: Option<i64>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    title: Option<String>,
    description: Option<String>,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
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
