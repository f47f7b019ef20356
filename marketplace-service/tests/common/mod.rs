use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Login;
use auth::TokenCodec;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use chrono::Duration;
use chrono::Utc;
use marketplace_service::domain::auth::errors::AuthError;
use marketplace_service::domain::auth::models::User;
use marketplace_service::domain::auth::models::UserId;
use marketplace_service::domain::auth::ports::UserRepository;
use marketplace_service::domain::auth::service::AuthService;
use marketplace_service::domain::item::errors::ItemError;
use marketplace_service::domain::item::models::Item;
use marketplace_service::domain::item::models::ItemFilters;
use marketplace_service::domain::item::models::ItemId;
use marketplace_service::domain::item::models::NewItem;
use marketplace_service::domain::item::ports::ItemRepository;
use marketplace_service::domain::item::service::ItemsService;
use marketplace_service::inbound::http::router::create_router;
use serde_json::Value;
use tower::ServiceExt;

/// Signing secret shared by the app under test and the token helpers
pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application backed by in-memory repositories
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_token_ttl(Duration::hours(24))
    }

    /// Build the app with a custom token lifetime. A negative lifetime
    /// makes every issued token already expired.
    pub fn with_token_ttl(ttl: Duration) -> Self {
        let user_repository = Arc::new(InMemoryUserRepository::default());
        let item_repository = Arc::new(InMemoryItemRepository::default());

        let auth_service = Arc::new(AuthService::new(
            user_repository,
            TokenCodec::new(JWT_SECRET, ttl),
        ));
        let items_service = Arc::new(ItemsService::new(item_repository));

        Self {
            router: create_router(auth_service, items_service),
        }
    }

    /// Helper to make a JSON POST request
    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.send(self.post_request(path, None, body.to_string()))
            .await
    }

    /// Helper to make a JSON POST request with a Bearer token
    pub async fn post_json_authenticated(
        &self,
        path: &str,
        token: &str,
        body: &Value,
    ) -> Response {
        self.post_json_with_authorization(path, &format!("Bearer {}", token), body)
            .await
    }

    /// Helper to make a JSON POST request with an arbitrary Authorization
    /// header
    pub async fn post_json_with_authorization(
        &self,
        path: &str,
        authorization: &str,
        body: &Value,
    ) -> Response {
        self.send(self.post_request(path, Some(authorization), body.to_string()))
            .await
    }

    /// Helper to POST an arbitrary body with a JSON content type
    pub async fn post_raw(&self, path: &str, body: &str) -> Response {
        self.send(self.post_request(path, None, body.to_string()))
            .await
    }

    /// Helper to make a GET request
    pub async fn get(&self, path: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Helper to make a GET request with an arbitrary Authorization header
    pub async fn get_with_authorization(&self, path: &str, authorization: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header(header::AUTHORIZATION, authorization)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    fn post_request(&self, path: &str, authorization: Option<&str>, body: String) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }

        builder.body(Body::from(body)).expect("Failed to build request")
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed")
    }
}

/// Read and parse a JSON response body
pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}

/// Decode a token issued by the app under test
pub fn decode_token(token: &str) -> auth::Claims {
    TokenCodec::new(JWT_SECRET, Duration::hours(24))
        .verify(token)
        .expect("Token failed verification")
}

/// User store over a Vec, sufficient for the registration flows
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, login: &Login, password_hash: &str) -> Result<User, AuthError> {
        let mut users = self.users.lock().expect("User store poisoned");

        // Mirrors the unique index on login
        if users.iter().any(|u| u.login == login.as_str()) {
            return Err(AuthError::DatabaseError("duplicate login".to_string()));
        }

        let user = User {
            id: UserId(users.len() as i64 + 1),
            login: login.as_str().to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().expect("User store poisoned");
        Ok(users.iter().find(|u| u.login == login).cloned())
    }
}

/// Item store over a Vec with the same filter and ordering behavior
/// as the SQL queries
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, new_item: &NewItem) -> Result<Item, ItemError> {
        let mut items = self.items.lock().expect("Item store poisoned");

        let item = Item {
            id: ItemId(items.len() as i64 + 1),
            title: new_item.title.clone(),
            description: new_item.description.clone(),
            image_url: new_item.image_url.clone(),
            price: new_item.price,
            author_id: new_item.author_id,
            author_login: new_item.author_login.clone(),
            created_at: Utc::now(),
        };
        items.push(item.clone());

        Ok(item)
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        filters: &ItemFilters,
    ) -> Result<Vec<Item>, ItemError> {
        let items = self.items.lock().expect("Item store poisoned");

        let mut matching: Vec<Item> = items
            .iter()
            .filter(|item| {
                filters.min_price.map_or(true, |min| item.price >= min)
                    && filters.max_price.map_or(true, |max| item.price <= max)
                    && filters
                        .title
                        .as_ref()
                        .map_or(true, |t| contains_ignore_case(&item.title, t))
                    && filters
                        .description
                        .as_ref()
                        .map_or(true, |d| contains_ignore_case(&item.description, d))
            })
            .cloned()
            .collect();

        // Newest first; id breaks ties between equal timestamps
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
