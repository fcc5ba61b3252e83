//! Unified error type for the product workflow and its collaborators.
//!
//! Business-rule failures carry a stable machine code (see [`Error::code`]) so the
//! boundary layer can map them to whatever transport status it needs.

use thiserror::Error;

/// All errors produced by this crate
#[derive(Debug, Error)]
pub enum Error {
    /// The caller identity does not resolve to a known member
    #[error("Member not found: {email}")]
    MemberNotFound {
        /// Email the lookup was made with
        email: String,
    },

    /// The member has no latitude/longitude pair on record
    #[error("Member {member_id} has no registered location")]
    LocationNotFound {
        /// Identifier of the member lacking a location
        member_id: String,
    },

    /// The target product does not exist
    #[error("Product not found: {product_id}")]
    ProductNotFound {
        /// Identifier that was looked up
        product_id: String,
    },

    /// A category identifier is not part of the catalog
    #[error("Category not found: {category_id}")]
    CategoryNotFound {
        /// Identifier that was looked up
        category_id: String,
    },

    /// The caller does not own the product it tried to modify
    #[error("Member {member_id} is not allowed to modify product {product_id}")]
    Unauthorized {
        /// Identifier of the calling member
        member_id: String,
        /// Identifier of the product
        product_id: String,
    },

    /// Invalid configuration or misuse of a collaborator
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Error bubbled up from the ORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl Error {
    /// Stable code identifying the kind of failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound { .. } => "MEMBER_NOT_FOUND",
            Self::LocationNotFound { .. } => "LOCATION_NOT_FOUND",
            Self::ProductNotFound { .. } => "PRODUCT_NOT_FOUND",
            Self::CategoryNotFound { .. } => "CATEGORY_NOT_FOUND",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Config { .. } => "CONFIGURATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
