use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::models::UserId;
use crate::domain::item::errors::ItemError;

/// Unique identifier of a marketplace item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A listing published on the marketplace.
///
/// Authorship fields are copied from the authenticated identity at
/// creation time and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub author_id: UserId,
    pub author_login: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for publishing a listing.
///
/// Construction goes through [`NewItem::new`], which owns the field
/// validation; a `NewItem` with a blank title or a non-positive price
/// cannot exist. Text fields are stored trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub author_id: UserId,
    pub author_login: String,
}

impl NewItem {
    /// Validate and normalize listing input.
    ///
    /// # Errors
    /// Returns [`ItemError::MissingFields`] when the title or description
    /// is blank after trimming, or the price is not strictly positive.
    pub fn new(
        author_id: UserId,
        author_login: &str,
        title: &str,
        description: &str,
        price: f64,
        image_url: &str,
    ) -> Result<Self, ItemError> {
        let title = title.trim();
        let description = description.trim();

        if title.is_empty() || description.is_empty() || price.is_nan() || price <= 0.0 {
            return Err(ItemError::MissingFields);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.trim().to_string(),
            price,
            author_id,
            author_login: author_login.to_string(),
        })
    }
}

/// Optional narrowing criteria for listing queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilters {
    pub title: Option<String>,
    pub description: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ItemFilters {
    /// Normalize raw filter input into its canonical form.
    ///
    /// Blank text filters and non-positive price bounds count as absent
    /// rather than invalid.
    ///
    /// # Errors
    /// Returns [`ItemError::InvalidPriceRange`] when both bounds are
    /// present and the lower one exceeds the upper.
    pub fn normalized(self) -> Result<Self, ItemError> {
        let trim = |text: Option<String>| {
            text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
        };

        let title = trim(self.title);
        let description = trim(self.description);
        let min_price = self.min_price.filter(|p| *p > 0.0);
        let max_price = self.max_price.filter(|p| *p > 0.0);

        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                return Err(ItemError::InvalidPriceRange);
            }
        }

        Ok(Self {
            title,
            description,
            min_price,
            max_price,
        })
    }
}
