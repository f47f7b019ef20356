use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemFilters;
use crate::domain::item::models::NewItem;

/// Port for marketplace item operations.
///
/// Primary interface for the inbound HTTP layer. Listing input arrives
/// pre-validated as [`NewItem`]; pagination and filters arrive raw and
/// are clamped and normalized here.
#[async_trait]
pub trait ItemsServicePort: Send + Sync + 'static {
    /// Publishes a new listing.
    ///
    /// # Errors
    /// Returns [`ItemError::CreateFailed`] when persistence fails.
    async fn create_item(&self, new_item: NewItem) -> Result<Item, ItemError>;

    /// Returns one page of listings, newest first.
    ///
    /// Out-of-range `page` and `limit` values are clamped rather than
    /// rejected; filters are normalized before the query runs.
    ///
    /// # Errors
    /// Returns [`ItemError::InvalidPriceRange`] for contradictory price
    /// bounds and [`ItemError::ListFailed`] when the query fails.
    async fn list_items(
        &self,
        page: i64,
        limit: i64,
        filters: ItemFilters,
    ) -> Result<Vec<Item>, ItemError>;
}

/// Repository interface for item persistence.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Persists a validated listing and returns the stored row.
    async fn create(&self, item: &NewItem) -> Result<Item, ItemError>;

    /// Fetches one page of listings ordered by creation time, newest
    /// first. `filters` must already be normalized.
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        filters: &ItemFilters,
    ) -> Result<Vec<Item>, ItemError>;
}
