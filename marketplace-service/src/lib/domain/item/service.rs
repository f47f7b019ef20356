use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemFilters;
use crate::domain::item::models::NewItem;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemsServicePort;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Domain service implementation for marketplace items.
///
/// Concrete implementation of ItemsServicePort with dependency injection.
pub struct ItemsService<R>
where
    R: ItemRepository,
{
    repository: Arc<R>,
}

impl<R> ItemsService<R>
where
    R: ItemRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ItemsServicePort for ItemsService<R>
where
    R: ItemRepository,
{
    async fn create_item(&self, new_item: NewItem) -> Result<Item, ItemError> {
        // Driver detail was already logged at the repository
        self.repository
            .create(&new_item)
            .await
            .map_err(|_| ItemError::CreateFailed)
    }

    async fn list_items(
        &self,
        page: i64,
        limit: i64,
        filters: ItemFilters,
    ) -> Result<Vec<Item>, ItemError> {
        // Out-of-range paging falls back to defaults instead of failing
        let page = if page < 1 { DEFAULT_PAGE } else { page };
        let limit = if (1..=MAX_LIMIT).contains(&limit) {
            limit
        } else {
            DEFAULT_LIMIT
        };
        let offset = (page - 1) * limit;

        let filters = filters.normalized()?;

        self.repository
            .list(offset, limit, &filters)
            .await
            .map_err(|_| ItemError::ListFailed)
    }
}
