use thiserror::Error;

/// Errors that can occur during marketplace item operations.
#[derive(Debug, Error)]
pub enum ItemError {
    // Validation errors
    #[error("title, description and positive price are required")]
    MissingFields,

    #[error("min_price cannot be greater than max_price")]
    InvalidPriceRange,

    // Operation failures reported to callers
    #[error("failed to create item")]
    CreateFailed,

    #[error("failed to list items")]
    ListFailed,

    // Infrastructure errors. The payload carries driver detail for
    // logging; Display stays generic.
    #[error("database error")]
    DatabaseError(String),
}
