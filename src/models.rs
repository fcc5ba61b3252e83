//! Request payloads and response projections for the product workflow.
//!
//! These are the shapes the boundary layer deserializes into and serializes out
//! of; field names are camelCase on the wire.

use crate::entities::product;
use serde::{Deserialize, Serialize};

/// A category applied to a product, as shown to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    /// Catalog identifier of the category
    pub category_id: String,
    /// Display title of the category
    pub title: String,
}

/// Payload for creating a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Listing title
    pub title: String,
    /// Free-text description
    pub content: String,
    /// Flat fee charged once per rental
    pub base_fee: i32,
    /// Fee charged per rented day
    pub fee_per_day: i32,
    /// Fee charged per day past the return date
    pub overdue_fee: i32,
    /// Minimum number of days a rental must last
    pub minimum_rental_period: i32,
    /// Categories to tag the listing with, in display order
    #[serde(default)]
    pub category_ids: Vec<String>,
}

/// Patch payload for updating a listing.
///
/// Every field is independently optional: `None` leaves the stored value alone,
/// `Some` overwrites it, including `Some(0)` and `Some(String::new())`.
/// `category_ids: Some(vec![])` removes every category from the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New flat fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<i32>,
    /// New per-day fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_per_day: Option<i32>,
    /// New overdue fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overdue_fee: Option<i32>,
    /// New minimum rental period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_rental_period: Option<i32>,
    /// Replacement category list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
}

impl UpdateProductRequest {
    /// Returns true when the patch would not change anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.base_fee.is_none()
            && self.fee_per_day.is_none()
            && self.overdue_fee.is_none()
            && self.minimum_rental_period.is_none()
            && self.category_ids.is_none()
    }
}

/// Projection of a listing returned by create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Identifier of the listing
    pub product_id: String,
    /// Owning member
    pub member_id: String,
    /// Listing title
    pub title: String,
    /// Free-text description
    pub content: String,
    /// Flat fee charged once per rental
    pub base_fee: i32,
    /// Fee charged per rented day
    pub fee_per_day: i32,
    /// Fee charged per day past the return date
    pub overdue_fee: i32,
    /// Minimum number of days a rental must last
    pub minimum_rental_period: i32,
    /// Number of ratings received
    pub total_rate_count: i32,
    /// Sum of all rating scores
    pub total_rate_score: i32,
    /// Number of times the listing was viewed
    pub view_count: i32,
    /// Categories on the listing, in the order they were supplied
    pub categories: Vec<CategoryDescriptor>,
}

impl ProductResponse {
    /// Builds the projection from a persisted product and its categories.
    #[must_use]
    pub fn from_model(product: product::Model, categories: Vec<CategoryDescriptor>) -> Self {
        Self {
            product_id: product.id,
            member_id: product.member_id,
            title: product.title,
            content: product.content,
            base_fee: product.base_fee,
            fee_per_day: product.fee_per_day,
            overdue_fee: product.overdue_fee,
            minimum_rental_period: product.minimum_rental_period,
            total_rate_count: product.total_rate_count,
            total_rate_score: product.total_rate_score,
            view_count: product.view_count,
            categories,
        }
    }
}
