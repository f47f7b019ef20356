use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;

use crate::domain::auth::models::UserId;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemFilters;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::NewItem;
use crate::domain::item::ports::ItemRepository;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    title: String,
    description: String,
    image_url: String,
    price: f64,
    author_id: i64,
    author_login: String,
    created_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: ItemId(row.id),
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            price: row.price,
            author_id: UserId(row.author_id),
            author_login: row.author_login,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: &NewItem) -> Result<Item, ItemError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (title, description, image_url, price, author_id, author_login)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, image_url, price, author_id, author_login, created_at
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.image_url)
        .bind(item.price)
        .bind(item.author_id.0)
        .bind(&item.author_login)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert item: {}", e);
            ItemError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        filters: &ItemFilters,
    ) -> Result<Vec<Item>, ItemError> {
        // Filter values are always bound parameters, never spliced into
        // the SQL text
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, title, description, image_url, price, author_id, author_login, created_at \
             FROM items WHERE 1=1",
        );

        if let Some(min_price) = filters.min_price {
            query.push(" AND price >= ").push_bind(min_price);
        }
        if let Some(max_price) = filters.max_price {
            query.push(" AND price <= ").push_bind(max_price);
        }
        if let Some(title) = &filters.title {
            query.push(" AND title ILIKE ").push_bind(format!("%{}%", title));
        }
        if let Some(description) = &filters.description {
            query
                .push(" AND description ILIKE ")
                .push_bind(format!("%{}%", description));
        }

        query.push(" ORDER BY created_at DESC LIMIT ").push_bind(limit);
        query.push(" OFFSET ").push_bind(offset);

        let rows = query
            .build_query_as::<ItemRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list items: {}", e);
                ItemError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(Item::from).collect())
    }
}
